//! Shared test utilities for the asc2netcdf workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Sample ASCII grid texts
//! - Generators for synthetic ASCII grids
//! - Temp directory and fixture file helpers
//! - Approximate and NaN-aware float assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for comparing float slices where NaN equals NaN.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_values_eq;
///
/// assert_values_eq!(&[1.0, f64::NAN], &[1.0, f64::NAN]);
/// ```
#[macro_export]
macro_rules! assert_values_eq {
    ($left:expr, $right:expr) => {{
        let left: &[f64] = $left;
        let right: &[f64] = $right;
        if !$crate::values_eq(left, right) {
            panic!(
                "assertion failed: `(left == right)` (NaN-aware)\n  left: `{:?}`,\n right: `{:?}`",
                left, right
            );
        }
    }};
}

/// Element-wise equality where two NaNs compare equal.
pub fn values_eq(left: &[f64], right: &[f64]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_values_eq_nan_aware() {
        assert!(values_eq(&[1.0, f64::NAN], &[1.0, f64::NAN]));
        assert!(!values_eq(&[1.0, f64::NAN], &[1.0, 2.0]));
        assert!(!values_eq(&[1.0], &[1.0, 2.0]));
    }

    #[test]
    #[should_panic(expected = "NaN-aware")]
    fn test_assert_values_eq_fails() {
        assert_values_eq!(&[1.0, 2.0], &[1.0, 3.0]);
    }
}
