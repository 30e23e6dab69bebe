use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::{
    budget::{progress_for_all, BudgetProgress},
    clock::Clock,
    seed,
    summary::{compute_summary_with_default, LedgerSummary, DEFAULT_CHART_COLOR},
    CategoryBudget, Transaction, TransactionDraft,
};

/// The budget screen's state: the ledger plus the category budgets it feeds.
///
/// Transitions return a new value and never touch `self`, so callers only
/// ever observe complete states.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerState {
    /// Most recent first.
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<CategoryBudget>,
}

impl LedgerState {
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<CategoryBudget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// The seeded demo ledger.
    pub fn demo() -> Self {
        Self::new(seed::demo_transactions(), seed::demo_budgets())
    }

    /// Replaces the whole state.
    pub fn reset(transactions: Vec<Transaction>, budgets: Vec<CategoryBudget>) -> Self {
        tracing::debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "ledger reset"
        );
        Self::new(transactions, budgets)
    }

    pub fn summary(&self) -> LedgerSummary {
        self.summary_with_default(DEFAULT_CHART_COLOR)
    }

    pub fn summary_with_default(&self, default_color: &str) -> LedgerSummary {
        compute_summary_with_default(&self.transactions, &self.budgets, default_color)
    }

    pub fn progress(&self) -> Vec<BudgetProgress> {
        progress_for_all(&self.budgets)
    }

    pub fn budget(&self, category: &str) -> Option<&CategoryBudget> {
        self.budgets.iter().find(|budget| budget.matches(category))
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Records a validated draft, see [`apply_transaction`].
    pub fn apply(
        &self,
        draft: &TransactionDraft,
        clock: &impl Clock,
    ) -> Result<LedgerState, LedgerError> {
        apply_transaction(self, draft, clock)
    }
}

/// Validates `draft` and returns the state with the new transaction recorded.
///
/// The transaction is prepended and dated `clock.today()`. Expenses also
/// raise `spent` on the budget whose category matches exactly; an expense
/// without a matching budget is still recorded. A rejected draft leaves
/// `state` as it was.
pub fn apply_transaction(
    state: &LedgerState,
    draft: &TransactionDraft,
    clock: &impl Clock,
) -> Result<LedgerState, LedgerError> {
    let transaction = draft.into_transaction(clock.today()).map_err(|err| {
        tracing::warn!(error = %err, "transaction draft rejected");
        err
    })?;

    let budgets = if transaction.is_expense() {
        state
            .budgets
            .iter()
            .map(|budget| {
                if budget.matches(&transaction.category) {
                    budget.clone().with_spent(budget.spent + transaction.amount)
                } else {
                    budget.clone()
                }
            })
            .collect()
    } else {
        state.budgets.clone()
    };

    tracing::debug!(
        id = %transaction.id,
        kind = ?transaction.kind,
        amount = transaction.amount,
        category = %transaction.category,
        "transaction recorded"
    );

    let mut transactions = Vec::with_capacity(state.transactions.len() + 1);
    transactions.push(transaction);
    transactions.extend(state.transactions.iter().cloned());

    Ok(LedgerState {
        transactions,
        budgets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{FixedClock, TransactionKind};
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
    }

    #[test]
    fn expense_is_prepended_and_charged_to_its_budget() {
        let state = LedgerState::demo();
        let next = state
            .apply(&TransactionDraft::expense("25", "Food", "Snacks"), &clock())
            .unwrap();

        assert_eq!(next.transaction_count(), state.transaction_count() + 1);
        assert_eq!(next.transactions[0].description, "Snacks");
        assert_eq!(next.transactions[0].date, clock().today());
        assert_eq!(next.budget("Food").unwrap().spent, 175.0);
        assert_eq!(next.budget("Rent").unwrap().spent, 800.0);
        // prior state untouched
        assert_eq!(state.budget("Food").unwrap().spent, 150.0);
    }

    #[test]
    fn income_leaves_budgets_alone() {
        let state = LedgerState::demo();
        let next = state
            .apply(&TransactionDraft::income("500", "Food", "Refund"), &clock())
            .unwrap();
        assert_eq!(next.budgets, state.budgets);
        assert_eq!(next.transactions[0].kind, TransactionKind::Income);
    }

    #[test]
    fn expense_without_budget_is_still_recorded() {
        let state = LedgerState::demo();
        let next = state
            .apply(&TransactionDraft::expense("12", "Gifts", "Card"), &clock())
            .unwrap();
        assert_eq!(next.budgets, state.budgets);
        assert_eq!(next.transactions[0].category, "Gifts");
    }

    #[test]
    fn padded_category_does_not_match_a_budget() {
        let state = LedgerState::demo();
        let next = state
            .apply(&TransactionDraft::expense("10", " Food ", "Snack"), &clock())
            .unwrap();
        assert_eq!(next.transactions[0].category, " Food ");
        assert_eq!(next.budgets, state.budgets);
    }

    #[test]
    fn rejected_draft_reports_reason() {
        let state = LedgerState::demo();
        let err = state
            .apply(&TransactionDraft::expense("ten", "Food", "Lunch"), &clock())
            .expect_err("non-numeric amount must be rejected");
        assert_eq!(err, LedgerError::InvalidAmount("ten".into()));
    }

    #[test]
    fn reset_replaces_everything() {
        let state = LedgerState::reset(Vec::new(), Vec::new());
        assert_eq!(state, LedgerState::default());
    }
}
