//! Error type for patch extraction and reassembly.

use thiserror::Error;

/// Raised eagerly when inputs to [`unfold`](crate::unfold) or
/// [`fold`](crate::fold) fail shape validation, before any output is
/// allocated.
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

    /// A dimension or grid parameter was zero.
    #[error("{operation}: `{parameter}` must be positive")]
    NonPositive {
        operation: &'static str,
        parameter: String,
    },

    /// The dilated kernel does not fit inside the padded axis extent.
    #[error(
        "{operation}: dilated kernel extent {effective} exceeds padded extent {padded} on spatial axis {axis}"
    )]
    KernelTooLarge {
        operation: &'static str,
        axis: usize,
        effective: usize,
        padded: usize,
    },

    /// An input tensor's shape disagrees with the patch grid.
    #[error("{operation}: expected shape {expected:?}, got {actual:?}")]
    ShapeMismatch {
        operation: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

/// Result type for patch operations
pub type Result<T> = std::result::Result<T, InvalidShapeError>;
