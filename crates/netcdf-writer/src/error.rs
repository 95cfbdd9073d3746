//! Error types for netCDF output.

use thiserror::Error;

/// Result type for netCDF writer operations.
pub type NetCdfResult<T> = Result<T, NetCdfError>;

/// Error types for netCDF output.
#[derive(Error, Debug)]
pub enum NetCdfError {
    /// File I/O error (temp file creation, final rename)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error reported by libnetcdf
    #[error("NetCDF error: {0}")]
    NetCdf(#[from] netcdf::Error),

    /// Missing required variable or dimension
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
