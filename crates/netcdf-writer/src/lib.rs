//! NetCDF output for labeled latitude/longitude grids.
//!
//! [`write_labeled_array`] stores a [`grid_common::LabeledArray`] as a
//! netCDF-4 file following CF conventions:
//!
//! - dimensions `latitude` and `longitude`
//! - coordinate variables of the same names (`degrees_north`/`degrees_east`)
//! - one `f64` data variable on `(latitude, longitude)` with `_FillValue = NaN`
//!
//! # Implementation Notes
//!
//! The netcdf crate wraps libnetcdf/HDF5, which need a real file path. Output
//! is therefore written to a temp file next to the destination and renamed
//! into place, so a failed write never leaves a partial file behind.

pub mod error;
pub mod native;
pub mod reader;
pub mod writer;

pub use error::{NetCdfError, NetCdfResult};
pub use native::silence_hdf5_errors;
pub use reader::{inspect, read_labeled_array, DataVariableInfo, NetCdfSummary};
pub use writer::{write_labeled_array, WriteOptions, CF_CONVENTIONS};
