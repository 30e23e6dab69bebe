use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// Direction of money flow for a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn sign(&self) -> &'static str {
        match self {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Replaces the generated identifier, used by seeded data.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Unvalidated user input for a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn expense(
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(TransactionKind::Expense, amount, category, description)
    }

    pub fn income(
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(TransactionKind::Income, amount, category, description)
    }

    /// Checks the draft and returns the parsed amount.
    ///
    /// The amount must be a positive, finite number; category and
    /// description must contain something other than whitespace.
    pub fn validate(&self) -> Result<f64, LedgerError> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or_else(|| LedgerError::InvalidAmount(self.amount.clone()))?;
        if self.category.trim().is_empty() {
            return Err(LedgerError::EmptyCategory);
        }
        if self.description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        Ok(amount)
    }

    /// Builds the transaction this draft describes, dated `date`.
    ///
    /// Category and description are stored as typed; budget matching is
    /// exact on the raw category.
    pub fn into_transaction(&self, date: NaiveDate) -> Result<Transaction, LedgerError> {
        let amount = self.validate()?;
        Ok(Transaction::new(
            self.kind,
            amount,
            self.category.clone(),
            self.description.clone(),
            date,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn draft_parses_decimal_amounts() {
        let draft = TransactionDraft::expense(" 12.50 ", "Food", "Lunch");
        assert_eq!(draft.validate(), Ok(12.5));
    }

    #[test]
    fn draft_rejects_non_numeric_zero_and_negative_amounts() {
        for amount in ["", "abc", "0", "-5", "NaN", "inf"] {
            let draft = TransactionDraft::expense(amount, "Food", "Lunch");
            assert!(
                matches!(draft.validate(), Err(LedgerError::InvalidAmount(_))),
                "amount {amount:?} should be rejected"
            );
        }
    }

    #[test]
    fn draft_rejects_blank_category_and_description() {
        let draft = TransactionDraft::expense("10", "  ", "Lunch");
        assert_eq!(draft.validate(), Err(LedgerError::EmptyCategory));

        let draft = TransactionDraft::expense("10", "Food", "");
        assert_eq!(draft.validate(), Err(LedgerError::EmptyDescription));
    }

    #[test]
    fn into_transaction_generates_unique_ids() {
        let draft = TransactionDraft::income("3000", "Salary", "Monthly salary");
        let first = draft.into_transaction(date()).unwrap();
        let second = draft.into_transaction(date()).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.kind, TransactionKind::Income);
        assert_eq!(first.date, date());
    }

    #[test]
    fn into_transaction_keeps_text_as_typed() {
        let draft = TransactionDraft::expense("10", " Food ", "Lunch ");
        let txn = draft.into_transaction(date()).unwrap();
        assert_eq!(txn.category, " Food ");
        assert_eq!(txn.description, "Lunch ");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }
}
