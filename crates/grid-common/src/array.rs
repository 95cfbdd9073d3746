//! A named 2D array bound to latitude/longitude axes.

use crate::{CoordinateAxes, GridError, GridResult, LATITUDE, LONGITUDE};

/// Variable name used when the caller does not pick one.
pub const DEFAULT_VARIABLE_NAME: &str = "variable";

/// Row-major grid values labeled with `(latitude, longitude)` dimensions.
///
/// `values[row * cols + col]` is the cell at `latitude[row]`,
/// `longitude[col]`. Missing cells are NaN.
#[derive(Debug, Clone)]
pub struct LabeledArray {
    name: String,
    axes: CoordinateAxes,
    values: Vec<f64>,
}

impl LabeledArray {
    /// Bind values to axes under `name`.
    ///
    /// Fails if either axis is empty, the value count does not match the
    /// axes, or the name is blank or contains a `/`.
    pub fn new(
        name: impl Into<String>,
        axes: CoordinateAxes,
        values: Vec<f64>,
    ) -> GridResult<Self> {
        let name = name.into();
        if name.trim().is_empty() || name.contains('/') {
            return Err(GridError::InvalidName(name));
        }
        if axes.is_empty() {
            return Err(GridError::Empty);
        }
        if values.len() != axes.len() {
            return Err(GridError::ShapeMismatch {
                rows: axes.rows(),
                cols: axes.cols(),
                expected: axes.len(),
                actual: values.len(),
            });
        }

        Ok(Self { name, axes, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn axes(&self) -> &CoordinateAxes {
        &self.axes
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Dimension names, outer first. Always `(latitude, longitude)`.
    pub fn dims(&self) -> [&'static str; 2] {
        [LATITUDE, LONGITUDE]
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.axes.rows(), self.axes.cols())
    }

    /// Value at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let (rows, cols) = self.shape();
        if row >= rows || col >= cols {
            return None;
        }
        self.values.get(row * cols + col).copied()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.axes.cols().max(1))
    }

    /// Number of NaN cells.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }
}
