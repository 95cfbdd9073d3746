//! Error types for the conversion pipeline.

use std::path::PathBuf;

use ascii_grid::AsciiGridError;
use grid_common::GridError;
use netcdf_writer::NetCdfError;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// A failed conversion, tagged with the stage that failed.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: AsciiGridError,
    },

    #[error("Failed to assemble grid")]
    Assemble(#[from] GridError),

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: NetCdfError,
    },
}

impl ConvertError {
    /// Short name of the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            ConvertError::Read { source, .. } => match source {
                AsciiGridError::HeaderParse { .. } => "header",
                AsciiGridError::GridParse { .. } => "grid",
                AsciiGridError::IoError(_) => "input",
            },
            ConvertError::Assemble(_) => "assemble",
            ConvertError::Write { .. } => "output",
        }
    }
}
