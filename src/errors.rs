use thiserror::Error;

/// Error type that captures common ledger failures.
///
/// Insufficient funds is not an error: withdrawals and transfers report it by
/// returning `false`.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("No withdrawals recorded; spending percentages are undefined")]
    NoSpending,
    #[error("Parse error: {0}")]
    Parse(String),
}
