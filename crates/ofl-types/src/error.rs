use thiserror::Error;

/// Errors produced by record field validation and encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("record type must be 0 or 1, got {0:?}")]
    InvalidRecordType(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
