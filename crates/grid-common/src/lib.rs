//! Common types shared by the asc2netcdf crates.
//!
//! The central type is [`LabeledArray`]: a row-major 2D grid bound to a
//! latitude axis (outer dimension) and a longitude axis (inner dimension).

pub mod array;
pub mod axes;
pub mod bbox;
pub mod error;

pub use array::{LabeledArray, DEFAULT_VARIABLE_NAME};
pub use axes::{CoordinateAxes, LATITUDE, LONGITUDE};
pub use bbox::BoundingBox;
pub use error::{GridError, GridResult};
