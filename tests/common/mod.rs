#![allow(dead_code)]

use budget_house::{
    ledger::{CategoryBudget, FixedClock, LedgerState, Transaction, TransactionKind},
    listings::{seed, Listing},
};
use chrono::NaiveDate;

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fixed_clock() -> FixedClock {
    FixedClock::on(sample_date(2024, 2, 15))
}

pub fn txn(kind: TransactionKind, amount: f64, category: &str) -> Transaction {
    Transaction::new(kind, amount, category, "fixture", sample_date(2024, 1, 10))
}

/// One salary payment and an untouched food budget.
pub fn salary_and_food() -> LedgerState {
    LedgerState::new(
        vec![txn(TransactionKind::Income, 3000.0, "Salary")],
        vec![CategoryBudget::new("Food", 500.0, "#FF6384")],
    )
}

pub fn fixture_listings() -> Vec<Listing> {
    seed::demo_listings()
}
