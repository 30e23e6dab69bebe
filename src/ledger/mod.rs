//! Budget ledger: transactions, category budgets, and the figures derived from them.

pub mod budget;
pub mod clock;
pub mod seed;
pub mod state;
pub mod summary;
pub mod transaction;

pub use budget::{budget_progress, progress_for_all, BudgetProgress, BudgetStatus, CategoryBudget};
pub use clock::{Clock, FixedClock, SystemClock};
pub use state::{apply_transaction, LedgerState};
pub use summary::{
    chart_series, compute_summary, compute_summary_with_default, expenses_by_category,
    linked_account, monthly_overview, ChartSlice, LedgerSummary, LinkedAccount, MonthlyFigure,
    DEFAULT_CHART_COLOR,
};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
