use thiserror::Error;

/// Reasons a transaction draft is turned away by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error("Description must not be empty")]
    EmptyDescription,
}

/// Failures surfaced by a remote listing source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Search cancelled")]
    Cancelled,
}

/// Error type that captures configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
