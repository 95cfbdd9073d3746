//! Sample ASCII grid texts.

/// 2x2 grid at (10, 20) with cellsize 5 and one no-data cell.
///
/// Converts to `longitude = [10, 15]`, `latitude = [25, 20]`,
/// data `[[1, 2], [NaN, 4]]`.
pub const SMALL_2X2: &str = "\
ncols 2
nrows 2
xllcorner 10
yllcorner 20
cellsize 5
NODATA_value -1
1 2
-1 4
";

/// 3 columns by 2 rows at the origin with unit cells.
pub const UNIT_3X2: &str = "\
ncols         3
nrows         2
xllcorner     0
yllcorner     0
cellsize      1
NODATA_value  -9999
-9999 -9998.999 7.5
1 2 3
";

/// Header cut off after four lines.
pub const TRUNCATED_HEADER: &str = "\
ncols 2
nrows 2
xllcorner 10
yllcorner 20
";

/// Header with a non-numeric cellsize.
pub const BAD_CELLSIZE: &str = "\
ncols 2
nrows 1
xllcorner 0
yllcorner 0
cellsize big
NODATA_value -9999
1 2
";

/// Second row is one value short.
pub const RAGGED_ROWS: &str = "\
ncols 3
nrows 2
xllcorner 0
yllcorner 0
cellsize 1
NODATA_value -9999
1 2 3
4 5
";

/// Data holds a non-numeric token.
pub const NON_NUMERIC_DATA: &str = "\
ncols 2
nrows 2
xllcorner 0
yllcorner 0
cellsize 1
NODATA_value -9999
1 2
3 abc
";

/// Header declares 3 rows, data has 2.
pub const SHORT_OF_NROWS: &str = "\
ncols 2
nrows 3
xllcorner 0
yllcorner 0
cellsize 1
NODATA_value -9999
1 2
3 4
";
