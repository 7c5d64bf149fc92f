use thiserror::Error;

/// Unified error type for ledger, inventory, and storage failures.
///
/// Every variant represents a rejected user action: the operation reports the
/// failure and leaves the books unchanged.
#[derive(Debug, Error)]
pub enum BooksError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Persistence error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, BooksError>;

impl From<std::io::Error> for BooksError {
    fn from(err: std::io::Error) -> Self {
        BooksError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BooksError {
    fn from(err: serde_json::Error) -> Self {
        BooksError::Storage(err.to_string())
    }
}
