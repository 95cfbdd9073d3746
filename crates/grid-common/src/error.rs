//! Error types for grid construction.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised when grid values and axes do not line up.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Shape mismatch: {rows} x {cols} axes need {expected} values, got {actual}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid variable name: {0:?}")]
    InvalidName(String),

    #[error("Grid has no rows or no columns")]
    Empty,
}
