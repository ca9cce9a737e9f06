use thiserror::Error;

/// Errors from Ledger Store operations.
///
/// The core treats every variant as the same generic access failure;
/// backends keep the cause for logging.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed on read, write, or history iteration.
    #[error("store backend failure: {0}")]
    Backend(String),

    /// I/O error from the underlying transport or storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
