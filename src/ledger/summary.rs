//! Aggregated figures derived from the ledger.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{CategoryBudget, Transaction, TransactionKind};

/// Chart color used when no budget carries the category.
pub const DEFAULT_CHART_COLOR: &str = "#8884d8";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub expenses_by_category: IndexMap<String, f64>,
    pub chart_series: Vec<ChartSlice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFigure {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

/// Balance of an external account shown on the budget screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedAccount {
    pub provider: String,
    pub balance: f64,
}

pub fn compute_summary(transactions: &[Transaction], budgets: &[CategoryBudget]) -> LedgerSummary {
    compute_summary_with_default(transactions, budgets, DEFAULT_CHART_COLOR)
}

pub fn compute_summary_with_default(
    transactions: &[Transaction],
    budgets: &[CategoryBudget],
    default_color: &str,
) -> LedgerSummary {
    let total_income = total_for(transactions, TransactionKind::Income);
    let total_expenses = total_for(transactions, TransactionKind::Expense);
    let expenses_by_category = expenses_by_category(transactions);
    let chart_series = chart_series_with_default(&expenses_by_category, budgets, default_color);
    LedgerSummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        expenses_by_category,
        chart_series,
    }
}

pub fn total_for(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .map(|txn| txn.amount)
        .sum()
}

/// Sums expenses per category, keyed in order of first appearance.
pub fn expenses_by_category(transactions: &[Transaction]) -> IndexMap<String, f64> {
    transactions
        .iter()
        .filter(|txn| txn.is_expense())
        .fold(IndexMap::new(), |mut acc, txn| {
            *acc.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
            acc
        })
}

pub fn chart_series(
    expenses: &IndexMap<String, f64>,
    budgets: &[CategoryBudget],
) -> Vec<ChartSlice> {
    chart_series_with_default(expenses, budgets, DEFAULT_CHART_COLOR)
}

pub fn chart_series_with_default(
    expenses: &IndexMap<String, f64>,
    budgets: &[CategoryBudget],
    default_color: &str,
) -> Vec<ChartSlice> {
    expenses
        .iter()
        .map(|(category, amount)| ChartSlice {
            name: category.clone(),
            value: *amount,
            color: budgets
                .iter()
                .find(|budget| budget.matches(category))
                .map(|budget| budget.color.clone())
                .unwrap_or_else(|| default_color.to_string()),
        })
        .collect()
}

/// Static six-month overview shown beside the category chart.
pub fn monthly_overview() -> Vec<MonthlyFigure> {
    [
        ("Jan", 3000.0, 1000.0),
        ("Feb", 3200.0, 1200.0),
        ("Mar", 3100.0, 1100.0),
        ("Apr", 3300.0, 1300.0),
        ("May", 3000.0, 1000.0),
        ("Jun", 3400.0, 1400.0),
    ]
    .into_iter()
    .map(|(month, income, expenses)| MonthlyFigure {
        month: month.to_string(),
        income,
        expenses,
    })
    .collect()
}

/// The demo's external account. Not connected to anything and never part
/// of the ledger totals.
pub fn linked_account() -> LinkedAccount {
    LinkedAccount {
        provider: "Revolut".to_string(),
        balance: 2145.67,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, amount: f64, category: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Transaction::new(kind, amount, category, "test", date)
    }

    #[test]
    fn totals_split_by_kind() {
        let transactions = vec![
            txn(TransactionKind::Income, 3000.0, "Salary"),
            txn(TransactionKind::Expense, 800.0, "Rent"),
            txn(TransactionKind::Expense, 150.0, "Food"),
        ];
        let summary = compute_summary(&transactions, &[]);
        assert_eq!(summary.total_income, 3000.0);
        assert_eq!(summary.total_expenses, 950.0);
        assert_eq!(summary.balance, 2050.0);
    }

    #[test]
    fn balance_may_go_negative() {
        let transactions = vec![
            txn(TransactionKind::Income, 100.0, "Salary"),
            txn(TransactionKind::Expense, 250.0, "Rent"),
        ];
        assert_eq!(compute_summary(&transactions, &[]).balance, -150.0);
    }

    #[test]
    fn expenses_by_category_skips_income_and_keeps_first_seen_order() {
        let transactions = vec![
            txn(TransactionKind::Expense, 20.0, "Transport"),
            txn(TransactionKind::Income, 3000.0, "Salary"),
            txn(TransactionKind::Expense, 50.0, "Food"),
            txn(TransactionKind::Expense, 30.0, "Transport"),
        ];
        let expenses = expenses_by_category(&transactions);
        let keys: Vec<&str> = expenses.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Transport", "Food"]);
        assert_eq!(expenses["Transport"], 50.0);
        assert!(!expenses.contains_key("Salary"));
    }

    #[test]
    fn chart_colors_fall_back_to_default() {
        let transactions = vec![
            txn(TransactionKind::Expense, 40.0, "Food"),
            txn(TransactionKind::Expense, 10.0, "Gifts"),
        ];
        let budgets = vec![CategoryBudget::new("Food", 500.0, "#FF6384")];
        let summary = compute_summary(&transactions, &budgets);
        assert_eq!(summary.chart_series[0].color, "#FF6384");
        assert_eq!(summary.chart_series[1].color, DEFAULT_CHART_COLOR);

        let custom = compute_summary_with_default(&transactions, &budgets, "#123456");
        assert_eq!(custom.chart_series[1].color, "#123456");
    }

    #[test]
    fn empty_ledger_yields_zeroes() {
        let summary = compute_summary(&[], &[]);
        assert_eq!(summary.balance, 0.0);
        assert!(summary.expenses_by_category.is_empty());
        assert!(summary.chart_series.is_empty());
    }

    #[test]
    fn monthly_overview_covers_six_months() {
        let overview = monthly_overview();
        assert_eq!(overview.len(), 6);
        assert_eq!(overview[0].month, "Jan");
        assert_eq!(overview[5].income, 3400.0);
    }

    #[test]
    fn linked_account_is_not_counted_in_totals() {
        let account = linked_account();
        assert_eq!(account.provider, "Revolut");
        let summary = compute_summary(&[], &[]);
        assert_eq!(summary.balance, 0.0);
        assert_eq!(account.balance, 2145.67);
    }
}
