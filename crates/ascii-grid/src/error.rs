//! Error types for ASCII grid parsing.

use thiserror::Error;

/// Result type for ASCII grid operations.
pub type AsciiGridResult<T> = Result<T, AsciiGridError>;

/// Error types for ASCII grid parsing.
///
/// Line numbers are 1-based and count header lines.
#[derive(Error, Debug)]
pub enum AsciiGridError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Truncated header or a header value that does not parse
    #[error("Header parse error at line {line}: {message}")]
    HeaderParse { line: usize, message: String },

    /// Non-numeric data token, wrong row width or wrong row count
    #[error("Grid parse error at line {line}: {message}")]
    GridParse { line: usize, message: String },
}

impl AsciiGridError {
    pub(crate) fn header(line: usize, message: impl Into<String>) -> Self {
        Self::HeaderParse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn grid(line: usize, message: impl Into<String>) -> Self {
        Self::GridParse {
            line,
            message: message.into(),
        }
    }

    /// True for header parse failures.
    pub fn is_header_error(&self) -> bool {
        matches!(self, Self::HeaderParse { .. })
    }

    /// True for grid data parse failures.
    pub fn is_grid_error(&self) -> bool {
        matches!(self, Self::GridParse { .. })
    }
}
