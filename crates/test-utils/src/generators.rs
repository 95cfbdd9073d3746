//! Generators for synthetic ASCII grids.

use std::fmt::Write;

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`, returned in
/// row-major order.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[1], 1000.0);
/// assert_eq!(grid[10], 1.0);
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Header values for a generated ASCII grid.
#[derive(Debug, Clone, Copy)]
pub struct AscSpec {
    pub ncols: usize,
    pub nrows: usize,
    pub xllcorner: f64,
    pub yllcorner: f64,
    pub cellsize: f64,
    pub nodata_value: f64,
}

impl Default for AscSpec {
    fn default() -> Self {
        Self {
            ncols: 4,
            nrows: 3,
            xllcorner: 0.0,
            yllcorner: 0.0,
            cellsize: 1.0,
            nodata_value: -9999.0,
        }
    }
}

/// Render an ASCII grid file from a header and row-major values.
///
/// Rows are written `spec.ncols` values at a time, so a value count that
/// is not a multiple of `ncols` produces a short final row.
pub fn render_asc(spec: &AscSpec, values: &[f64]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ncols         {}", spec.ncols);
    let _ = writeln!(out, "nrows         {}", spec.nrows);
    let _ = writeln!(out, "xllcorner     {}", spec.xllcorner);
    let _ = writeln!(out, "yllcorner     {}", spec.yllcorner);
    let _ = writeln!(out, "cellsize      {}", spec.cellsize);
    let _ = writeln!(out, "NODATA_value  {}", spec.nodata_value);

    for row in values.chunks(spec.ncols.max(1)) {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// Render a grid of `create_test_grid` values with every `nodata_every`-th
/// cell set to the no-data sentinel (0 disables).
pub fn create_test_asc(spec: &AscSpec, nodata_every: usize) -> String {
    let mut values = create_test_grid(spec.ncols, spec.nrows);
    if nodata_every > 0 {
        for value in values.iter_mut().step_by(nodata_every) {
            *value = spec.nodata_value;
        }
    }
    render_asc(spec, &values)
}
