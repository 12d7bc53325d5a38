//! Error type for dictionary construction.

use thiserror::Error;

/// Raised eagerly when dictionary parameters fail shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidShapeError {
    /// A shape tuple had the wrong number of entries.
    #[error("{operation}: `{parameter}` must have {expected} entries, got {actual}")]
    WrongArity {
        operation: &'static str,
        parameter: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A size or atom count was zero.
    #[error("{operation}: `{parameter}` must be positive")]
    NonPositive {
        operation: &'static str,
        parameter: String,
    },
}

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, InvalidShapeError>;
