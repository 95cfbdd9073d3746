//! Grid data parsing and no-data masking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use grid_common::{CoordinateAxes, GridResult, LabeledArray};
use tracing::{debug, info, warn};

use crate::error::{AsciiGridError, AsciiGridResult};
use crate::header::{parse_header, GridHeader, HEADER_LINES};

/// Upper bound on cells reserved up front from the declared header size.
const MAX_PREALLOC_CELLS: usize = 1 << 24;

/// How to treat a data row count that differs from the header's `nrows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowCountPolicy {
    /// Fail with a grid parse error.
    #[default]
    Strict,
    /// Warn and keep the rows actually read.
    Lenient,
}

/// A parsed ASCII grid with no-data cells already replaced by NaN.
#[derive(Debug, Clone)]
pub struct AsciiGrid {
    pub header: GridHeader,
    /// Number of data rows actually read
    pub rows: usize,
    /// Row-major cell values, `rows * header.ncols` long
    pub values: Vec<f64>,
    /// Number of cells that matched the no-data sentinel
    pub nodata_cells: usize,
}

impl AsciiGrid {
    /// Coordinate axes derived from the header and the rows read.
    pub fn axes(&self) -> CoordinateAxes {
        self.header.axes(self.rows)
    }

    /// Bind the grid to its axes under `name`.
    pub fn into_labeled_array(self, name: &str) -> GridResult<LabeledArray> {
        let axes = self.axes();
        LabeledArray::new(name, axes, self.values)
    }
}

/// Open `path` once and read header and grid from the same buffered reader.
pub fn read_ascii_grid<P: AsRef<Path>>(
    path: P,
    policy: RowCountPolicy,
) -> AsciiGridResult<AsciiGrid> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Opening ASCII grid");

    let mut reader = BufReader::new(File::open(path)?);
    parse_ascii_grid(&mut reader, policy)
}

/// Parse a complete ASCII grid (header followed by data) from `reader`.
pub fn parse_ascii_grid<R: BufRead>(
    reader: &mut R,
    policy: RowCountPolicy,
) -> AsciiGridResult<AsciiGrid> {
    let header = parse_header(reader)?;
    debug!(
        ncols = header.ncols,
        nrows = header.nrows,
        xllcorner = header.xllcorner,
        yllcorner = header.yllcorner,
        cellsize = header.cellsize,
        nodata_value = header.nodata_value,
        "Parsed ASCII grid header"
    );

    let grid = parse_grid(reader, header, policy)?;
    info!(
        cols = grid.header.ncols,
        rows = grid.rows,
        nodata_cells = grid.nodata_cells,
        "Read ASCII grid"
    );
    Ok(grid)
}

/// Read every remaining line of `reader` as a grid row.
///
/// Blank lines are skipped. Each row must hold exactly `header.ncols`
/// values. Cells equal to `header.nodata_value` become NaN.
pub fn parse_grid<R: BufRead>(
    reader: &mut R,
    header: GridHeader,
    policy: RowCountPolicy,
) -> AsciiGridResult<AsciiGrid> {
    let ncols = header.ncols;
    let mut values = Vec::with_capacity(ncols.saturating_mul(header.nrows).min(MAX_PREALLOC_CELLS));
    let mut rows = 0;
    let mut nodata_cells = 0;
    let mut last_line = HEADER_LINES;

    for (offset, line) in reader.lines().enumerate() {
        let line_no = HEADER_LINES + offset + 1;
        let line = line?;
        last_line = line_no;

        let mut width = 0;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| {
                AsciiGridError::grid(line_no, format!("non-numeric value '{}'", token))
            })?;

            if header.is_nodata(value) {
                values.push(f64::NAN);
                nodata_cells += 1;
            } else {
                values.push(value);
            }
            width += 1;
        }

        if width == 0 {
            continue;
        }
        if width != ncols {
            return Err(AsciiGridError::grid(
                line_no,
                format!("row {} has {} values, expected {} (ncols)", rows + 1, width, ncols),
            ));
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(AsciiGridError::grid(last_line, "no data rows after header"));
    }

    if rows != header.nrows {
        match policy {
            RowCountPolicy::Strict => {
                return Err(AsciiGridError::grid(
                    last_line,
                    format!("found {} data rows, header declares {} (nrows)", rows, header.nrows),
                ));
            }
            RowCountPolicy::Lenient => {
                warn!(
                    declared = header.nrows,
                    actual = rows,
                    "Row count differs from header; using rows read"
                );
            }
        }
    }

    Ok(AsciiGrid {
        header,
        rows,
        values,
        nodata_cells,
    })
}
