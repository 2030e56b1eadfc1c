//! Anomaly injection error types.

use thiserror::Error;

/// Anomaly injection errors.
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Missing column: {name}")]
    MissingColumn { name: String },

    #[error("Column length mismatch: {column} has {got} values, index has {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },
}

/// Result type for anomaly injection operations.
pub type Result<T> = std::result::Result<T, InjectError>;
