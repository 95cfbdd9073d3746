//! Latitude/longitude coordinate axes for corner-referenced grids.

use serde::{Deserialize, Serialize};

use crate::BoundingBox;

/// Name of the outer (row) dimension and its coordinate variable.
pub const LATITUDE: &str = "latitude";

/// Name of the inner (column) dimension and its coordinate variable.
pub const LONGITUDE: &str = "longitude";

/// One coordinate value per grid row and per grid column.
///
/// Row 0 is the northernmost row, so `latitude` is descending when the
/// cell size is positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateAxes {
    pub latitude: Vec<f64>,
    pub longitude: Vec<f64>,
}

impl CoordinateAxes {
    /// Derive axes from a lower-left corner and a uniform cell size.
    ///
    /// `longitude[i] = x_corner + cellsize * i` and
    /// `latitude[j] = y_corner + cellsize * (rows - 1 - j)`, so the last row
    /// sits on `y_corner`.
    pub fn from_corner(
        x_corner: f64,
        y_corner: f64,
        cellsize: f64,
        cols: usize,
        rows: usize,
    ) -> Self {
        let longitude = (0..cols)
            .map(|i| x_corner + cellsize * i as f64)
            .collect();
        let latitude = (0..rows)
            .map(|j| y_corner + cellsize * (rows - 1 - j) as f64)
            .collect();

        Self {
            latitude,
            longitude,
        }
    }

    /// Number of rows (latitude points).
    pub fn rows(&self) -> usize {
        self.latitude.len()
    }

    /// Number of columns (longitude points).
    pub fn cols(&self) -> usize {
        self.longitude.len()
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Check if either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Extent of the axes with longitude as x and latitude as y.
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_axes(&self.longitude, &self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_grid() {
        let axes = CoordinateAxes::from_corner(0.0, 0.0, 1.0, 3, 2);
        assert_eq!(axes.longitude, vec![0.0, 1.0, 2.0]);
        assert_eq!(axes.latitude, vec![1.0, 0.0]);
        assert_eq!(axes.len(), 6);
    }

    #[test]
    fn test_offset_corner() {
        let axes = CoordinateAxes::from_corner(10.0, 20.0, 5.0, 2, 2);
        assert_eq!(axes.longitude, vec![10.0, 15.0]);
        assert_eq!(axes.latitude, vec![25.0, 20.0]);
    }

    #[test]
    fn test_single_row_sits_on_corner() {
        let axes = CoordinateAxes::from_corner(-180.0, -90.0, 0.5, 4, 1);
        assert_eq!(axes.latitude, vec![-90.0]);
        assert_eq!(axes.longitude, vec![-180.0, -179.5, -179.0, -178.5]);
    }

    #[test]
    fn test_no_rows() {
        let axes = CoordinateAxes::from_corner(0.0, 0.0, 1.0, 3, 0);
        assert!(axes.latitude.is_empty());
        assert!(axes.is_empty());
        assert!(axes.bbox().is_none());
    }
}
