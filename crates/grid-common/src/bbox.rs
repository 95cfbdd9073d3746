//! Bounding box of a set of coordinate axes.

use serde::{Deserialize, Serialize};

/// Extent of a grid in axis units (degrees for geographic grids).
///
/// Built from coordinate values, so it spans cell positions rather than
/// cell edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing every x and y value, or `None` if either
    /// slice is empty.
    pub fn from_axes(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let (min_x, max_x) = min_max(xs)?;
        let (min_y, max_y) = min_max(ys)?;
        Some(Self::new(min_x, min_y, max_x, max_y))
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_axes_descending_y() {
        let bbox = BoundingBox::from_axes(&[10.0, 15.0], &[25.0, 20.0]).unwrap();
        assert_eq!(bbox, BoundingBox::new(10.0, 20.0, 15.0, 25.0));
    }

    #[test]
    fn test_from_axes_empty() {
        assert!(BoundingBox::from_axes(&[], &[1.0]).is_none());
        assert!(BoundingBox::from_axes(&[1.0], &[]).is_none());
    }
}
