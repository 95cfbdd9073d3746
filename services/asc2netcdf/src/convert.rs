//! The ASCII grid to netCDF pipeline.

use std::path::Path;

use ascii_grid::{read_ascii_grid, GridHeader, RowCountPolicy};
use chrono::{DateTime, Utc};
use grid_common::{BoundingBox, LabeledArray, DEFAULT_VARIABLE_NAME};
use netcdf_writer::{write_labeled_array, WriteOptions};
use serde::Serialize;
use tracing::info;

use crate::error::{ConvertError, ConvertResult};

/// Tool name recorded in the `history` attribute.
const TOOL_NAME: &str = "asc2netcdf";

/// Options for a single conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Name of the data variable in the output
    pub variable_name: String,
    /// Handling of a row count that differs from `nrows`
    pub row_policy: RowCountPolicy,
    /// Global `title` attribute
    pub title: Option<String>,
    /// Data variable `units`
    pub units: Option<String>,
    /// Data variable `long_name`
    pub long_name: Option<String>,
    /// Deflate level for the data variable
    pub deflate_level: Option<i32>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            variable_name: DEFAULT_VARIABLE_NAME.to_string(),
            row_policy: RowCountPolicy::Strict,
            title: None,
            units: None,
            long_name: None,
            deflate_level: None,
        }
    }
}

/// What was read from the input grid.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub variable_name: String,
    pub header: GridHeader,
    /// Data rows actually read
    pub rows: usize,
    pub cols: usize,
    pub nodata_cells: usize,
    pub bbox: Option<BoundingBox>,
}

/// Read `input` and assemble the labeled array without writing anything.
pub fn prepare(
    input: &Path,
    options: &ConvertOptions,
) -> ConvertResult<(LabeledArray, ConversionSummary)> {
    let grid = read_ascii_grid(input, options.row_policy).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let header = grid.header.clone();
    let nodata_cells = grid.nodata_cells;
    let array = grid.into_labeled_array(&options.variable_name)?;
    let (rows, cols) = array.shape();

    let summary = ConversionSummary {
        variable_name: array.name().to_string(),
        header,
        rows,
        cols,
        nodata_cells,
        bbox: array.axes().bbox(),
    };
    Ok((array, summary))
}

/// Convert the ASCII grid at `input` into a netCDF file at `output`.
///
/// Any failure aborts the conversion and leaves `output` untouched.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> ConvertResult<ConversionSummary> {
    info!(
        input = %input.display(),
        output = %output.display(),
        variable = %options.variable_name,
        "Converting ASCII grid to NetCDF"
    );

    let (array, summary) = prepare(input, options)?;

    let write_options = WriteOptions {
        title: options.title.clone(),
        source: input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        history: Some(history_line(input, output, Utc::now())),
        units: options.units.clone(),
        long_name: options.long_name.clone(),
        nodata_value: Some(summary.header.nodata_value),
        deflate_level: options.deflate_level,
    };

    write_labeled_array(output, &array, &write_options).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        rows = summary.rows,
        cols = summary.cols,
        nodata_cells = summary.nodata_cells,
        "Conversion completed"
    );
    Ok(summary)
}

/// CF `history` entry: UTC timestamp followed by the command.
pub fn history_line(input: &Path, output: &Path, at: DateTime<Utc>) -> String {
    format!(
        "{}: {} {} {}",
        at.format("%Y-%m-%dT%H:%M:%SZ"),
        TOOL_NAME,
        input.display(),
        output.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.variable_name, "variable");
        assert_eq!(options.row_policy, RowCountPolicy::Strict);
        assert!(options.deflate_level.is_none());
    }

    #[test]
    fn test_history_line() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let line = history_line(Path::new("in.asc"), Path::new("out.nc"), at);
        assert_eq!(line, "2024-01-15T12:00:00Z: asc2netcdf in.asc out.nc");
    }
}
