//! ESRI ASCII grid reader.
//!
//! An ASCII grid is a plain-text raster: a six-line header (`ncols`,
//! `nrows`, `xllcorner`, `yllcorner`, `cellsize`, `NODATA_value`) followed by
//! row-major cell values, northernmost row first.
//!
//! [`read_ascii_grid`] opens the file once and parses header and data from a
//! single buffered reader. No-data cells are replaced with NaN while reading,
//! and [`AsciiGrid::into_labeled_array`] binds the result to
//! latitude/longitude axes.

pub mod error;
pub mod header;
pub mod reader;

pub use error::{AsciiGridError, AsciiGridResult};
pub use header::{parse_header, GridHeader, HeaderField, HEADER_LINES};
pub use reader::{parse_ascii_grid, parse_grid, read_ascii_grid, AsciiGrid, RowCountPolicy};
