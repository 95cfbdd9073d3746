//! The fixed six-line ESRI ASCII grid header.
//!
//! ```text
//! ncols         4
//! nrows         6
//! xllcorner     0.0
//! yllcorner     0.0
//! cellsize      50.0
//! NODATA_value  -9999
//! ```
//!
//! Only line position matters: the keyword text is not checked and the value
//! is always the second whitespace-separated token.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use grid_common::CoordinateAxes;
use serde::{Deserialize, Serialize};

use crate::error::{AsciiGridError, AsciiGridResult};

/// Number of header lines preceding the grid data.
pub const HEADER_LINES: usize = 6;

/// Header fields in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Ncols,
    Nrows,
    XllCorner,
    YllCorner,
    Cellsize,
    NodataValue,
}

impl HeaderField {
    /// All fields in the order they appear in the file.
    pub const ORDER: [HeaderField; HEADER_LINES] = [
        HeaderField::Ncols,
        HeaderField::Nrows,
        HeaderField::XllCorner,
        HeaderField::YllCorner,
        HeaderField::Cellsize,
        HeaderField::NodataValue,
    ];

    /// Conventional keyword for this field.
    pub fn keyword(&self) -> &'static str {
        match self {
            HeaderField::Ncols => "ncols",
            HeaderField::Nrows => "nrows",
            HeaderField::XllCorner => "xllcorner",
            HeaderField::YllCorner => "yllcorner",
            HeaderField::Cellsize => "cellsize",
            HeaderField::NodataValue => "NODATA_value",
        }
    }

    /// 1-based line number of this field.
    pub fn line(&self) -> usize {
        match self {
            HeaderField::Ncols => 1,
            HeaderField::Nrows => 2,
            HeaderField::XllCorner => 3,
            HeaderField::YllCorner => 4,
            HeaderField::Cellsize => 5,
            HeaderField::NodataValue => 6,
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Parsed ASCII grid header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridHeader {
    /// Number of columns
    pub ncols: usize,
    /// Declared number of rows
    pub nrows: usize,
    /// Lower-left corner x (map units)
    pub xllcorner: f64,
    /// Lower-left corner y (map units)
    pub yllcorner: f64,
    /// Uniform cell edge length
    pub cellsize: f64,
    /// Sentinel marking missing cells
    pub nodata_value: f64,
}

impl GridHeader {
    /// Coordinate axes for `rows` data rows.
    ///
    /// `rows` is the number of rows actually read, which may differ from
    /// `nrows` when the grid was read leniently.
    pub fn axes(&self, rows: usize) -> CoordinateAxes {
        CoordinateAxes::from_corner(self.xllcorner, self.yllcorner, self.cellsize, self.ncols, rows)
    }

    /// Check whether a cell holds the no-data sentinel (exact equality).
    pub fn is_nodata(&self, value: f64) -> bool {
        value == self.nodata_value
    }
}

/// Read the six header lines from `reader`.
///
/// The reader is left positioned at the first data line.
pub fn parse_header<R: BufRead>(reader: &mut R) -> AsciiGridResult<GridHeader> {
    let mut tokens: Vec<String> = Vec::with_capacity(HEADER_LINES);
    let mut line = String::new();

    for field in HeaderField::ORDER {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(AsciiGridError::header(
                field.line(),
                format!(
                    "header truncated: expected {} lines, found {} (missing {})",
                    HEADER_LINES,
                    field.line() - 1,
                    field
                ),
            ));
        }

        let value = line.split_whitespace().nth(1).ok_or_else(|| {
            AsciiGridError::header(field.line(), format!("missing value for {}", field))
        })?;
        tokens.push(value.to_string());
    }

    Ok(GridHeader {
        ncols: parse_value(&tokens[0], HeaderField::Ncols)?,
        nrows: parse_value(&tokens[1], HeaderField::Nrows)?,
        xllcorner: parse_value(&tokens[2], HeaderField::XllCorner)?,
        yllcorner: parse_value(&tokens[3], HeaderField::YllCorner)?,
        cellsize: parse_value(&tokens[4], HeaderField::Cellsize)?,
        nodata_value: parse_value(&tokens[5], HeaderField::NodataValue)?,
    })
}

fn parse_value<T: FromStr>(token: &str, field: HeaderField) -> AsciiGridResult<T> {
    token.parse().map_err(|_| {
        AsciiGridError::header(
            field.line(),
            format!("invalid value for {}: '{}'", field, token),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "ncols 3\nnrows 2\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -9999\n";

    #[test]
    fn test_parse_header() {
        let header = parse_header(&mut Cursor::new(HEADER)).unwrap();
        assert_eq!(header.ncols, 3);
        assert_eq!(header.nrows, 2);
        assert_eq!(header.xllcorner, 0.0);
        assert_eq!(header.cellsize, 1.0);
        assert_eq!(header.nodata_value, -9999.0);
    }

    #[test]
    fn test_keywords_are_ignored() {
        let text = "a 4\nb 5\nc 1.5\nd -2.5\ne 0.25\nf -1\n";
        let header = parse_header(&mut Cursor::new(text)).unwrap();
        assert_eq!(header.ncols, 4);
        assert_eq!(header.nrows, 5);
        assert_eq!(header.xllcorner, 1.5);
        assert_eq!(header.yllcorner, -2.5);
    }

    #[test]
    fn test_leaves_reader_at_data() {
        let text = format!("{}1 2 3\n", HEADER);
        let mut cursor = Cursor::new(text);
        parse_header(&mut cursor).unwrap();

        let mut rest = String::new();
        cursor.read_line(&mut rest).unwrap();
        assert_eq!(rest.trim(), "1 2 3");
    }

    #[test]
    fn test_truncated_header() {
        let text = "ncols 3\nnrows 2\nxllcorner 0\nyllcorner 0\n";
        match parse_header(&mut Cursor::new(text)) {
            Err(AsciiGridError::HeaderParse { line, .. }) => assert_eq!(line, 5),
            other => panic!("expected header error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_value_token() {
        let text = "ncols 3\nnrows\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -9999\n";
        match parse_header(&mut Cursor::new(text)) {
            Err(AsciiGridError::HeaderParse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("nrows"));
            }
            other => panic!("expected header error, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_fields_reject_floats() {
        let text = "ncols 3.5\nnrows 2\nxllcorner 0\nyllcorner 0\ncellsize 1\nNODATA_value -9999\n";
        let err = parse_header(&mut Cursor::new(text)).unwrap_err();
        assert!(err.is_header_error());
    }

    #[test]
    fn test_is_nodata_exact() {
        let header = parse_header(&mut Cursor::new(HEADER)).unwrap();
        assert!(header.is_nodata(-9999.0));
        assert!(!header.is_nodata(-9998.999));
    }
}
