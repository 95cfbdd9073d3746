//! ESRI ASCII grid to netCDF converter.
//!
//! Reads a `.asc` raster, derives latitude/longitude axes from its
//! lower-left corner and cell size, replaces no-data cells with NaN and
//! writes the grid as a single CF netCDF variable on
//! `(latitude, longitude)`.

pub mod cli;
pub mod convert;
pub mod error;

pub use cli::{normalize_legacy_flags, Args, LogFormat};
pub use convert::{convert, history_line, prepare, ConversionSummary, ConvertOptions};
pub use error::{ConvertError, ConvertResult};
