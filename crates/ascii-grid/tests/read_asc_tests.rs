//! Tests for reading ASCII grid files from disk.

use ascii_grid::{read_ascii_grid, AsciiGridError, RowCountPolicy};
use test_utils::{
    assert_values_eq, create_test_asc, fixtures, temp_test_dir, write_fixture, AscSpec,
};

// ============================================================================
// Successful reads
// ============================================================================

#[test]
fn test_read_small_grid() {
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "small.asc", fixtures::SMALL_2X2);

    let grid = read_ascii_grid(&path, RowCountPolicy::Strict).unwrap();
    assert_eq!(grid.header.ncols, 2);
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.nodata_cells, 1);
    assert_values_eq!(&grid.values, &[1.0, 2.0, f64::NAN, 4.0]);

    let axes = grid.axes();
    assert_eq!(axes.longitude, vec![10.0, 15.0]);
    assert_eq!(axes.latitude, vec![25.0, 20.0]);
}

#[test]
fn test_nodata_exact_match_only() {
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "unit.asc", fixtures::UNIT_3X2);

    let grid = read_ascii_grid(&path, RowCountPolicy::Strict).unwrap();
    assert!(grid.values[0].is_nan());
    assert_eq!(grid.values[1], -9998.999);
    assert_eq!(grid.nodata_cells, 1);
}

#[test]
fn test_generated_grid_into_labeled_array() {
    let spec = AscSpec {
        ncols: 6,
        nrows: 4,
        xllcorner: -100.0,
        yllcorner: 30.0,
        cellsize: 0.5,
        nodata_value: -9999.0,
    };
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "gen.asc", &create_test_asc(&spec, 7));

    let grid = read_ascii_grid(&path, RowCountPolicy::Strict).unwrap();
    assert_eq!(grid.nodata_cells, 4);

    let array = grid.into_labeled_array("temperature").unwrap();
    assert_eq!(array.shape(), (4, 6));
    assert_eq!(array.axes().latitude, vec![31.5, 31.0, 30.5, 30.0]);
    assert_eq!(array.axes().longitude[5], -97.5);
    assert_eq!(array.get(1, 2), Some(2001.0));
    assert!(array.get(0, 0).unwrap().is_nan());
}

#[test]
fn test_crlf_line_endings() {
    let dir = temp_test_dir();
    let text = fixtures::SMALL_2X2.replace('\n', "\r\n");
    let path = write_fixture(dir.path(), "crlf.asc", &text);

    let grid = read_ascii_grid(&path, RowCountPolicy::Strict).unwrap();
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.values[3], 4.0);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_file_is_io_error() {
    let dir = temp_test_dir();
    let err = read_ascii_grid(dir.path().join("absent.asc"), RowCountPolicy::Strict).unwrap_err();
    assert!(matches!(err, AsciiGridError::IoError(_)));
}

#[test]
fn test_truncated_header() {
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "trunc.asc", fixtures::TRUNCATED_HEADER);
    let err = read_ascii_grid(&path, RowCountPolicy::Strict).unwrap_err();
    assert!(err.is_header_error());
}

#[test]
fn test_bad_cellsize() {
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "bad.asc", fixtures::BAD_CELLSIZE);
    match read_ascii_grid(&path, RowCountPolicy::Strict) {
        Err(AsciiGridError::HeaderParse { line, message }) => {
            assert_eq!(line, 5);
            assert!(message.contains("cellsize"));
        }
        other => panic!("expected header error, got {:?}", other),
    }
}

#[test]
fn test_ragged_rows() {
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "ragged.asc", fixtures::RAGGED_ROWS);
    match read_ascii_grid(&path, RowCountPolicy::Lenient) {
        Err(AsciiGridError::GridParse { line, .. }) => assert_eq!(line, 8),
        other => panic!("expected grid error, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_data() {
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "nan.asc", fixtures::NON_NUMERIC_DATA);
    let err = read_ascii_grid(&path, RowCountPolicy::Strict).unwrap_err();
    assert!(err.is_grid_error());
    assert!(err.to_string().contains("abc"));
}

// ============================================================================
// Row count policy
// ============================================================================

#[test]
fn test_row_count_mismatch_strict() {
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "short.asc", fixtures::SHORT_OF_NROWS);
    let err = read_ascii_grid(&path, RowCountPolicy::Strict).unwrap_err();
    assert!(err.is_grid_error());
}

#[test]
fn test_row_count_mismatch_lenient() {
    let dir = temp_test_dir();
    let path = write_fixture(dir.path(), "short.asc", fixtures::SHORT_OF_NROWS);
    let grid = read_ascii_grid(&path, RowCountPolicy::Lenient).unwrap();
    assert_eq!(grid.header.nrows, 3);
    assert_eq!(grid.rows, 2);
    assert_eq!(grid.axes().latitude, vec![1.0, 0.0]);
}
