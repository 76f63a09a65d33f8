// Keyfob — Top-level error types
//
// Aggregates errors from the store module into a single error enum for the
// application boundary.

use thiserror::Error;

/// Top-level error type for all Keyfob operations.
#[derive(Debug, Error)]
pub enum KeyfobError {
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, KeyfobError>;
