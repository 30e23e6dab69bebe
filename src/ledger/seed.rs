use chrono::NaiveDate;

use super::{CategoryBudget, Transaction, TransactionKind};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default()
}

pub fn demo_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(TransactionKind::Income, 3000.0, "Salary", "Monthly salary", day(1))
            .with_id("1"),
        Transaction::new(TransactionKind::Expense, 800.0, "Rent", "Monthly rent payment", day(2))
            .with_id("2"),
        Transaction::new(TransactionKind::Expense, 150.0, "Food", "Groceries", day(3)).with_id("3"),
        Transaction::new(TransactionKind::Expense, 50.0, "Transport", "Bus pass", day(4))
            .with_id("4"),
    ]
}

pub fn demo_budgets() -> Vec<CategoryBudget> {
    vec![
        CategoryBudget::new("Food", 500.0, "#FF6384").with_spent(150.0),
        CategoryBudget::new("Transport", 200.0, "#36A2EB").with_spent(50.0),
        CategoryBudget::new("Entertainment", 300.0, "#FFCE56"),
        CategoryBudget::new("Rent", 1000.0, "#4BC0C0").with_spent(800.0),
        CategoryBudget::new("Utilities", 200.0, "#9966FF"),
    ]
}
