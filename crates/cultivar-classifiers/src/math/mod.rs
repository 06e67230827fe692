//! Small dense matrix type used by the scaler and the classifiers.
//!
//! Rows are samples and columns are features, stored row-major so a single
//! sample can be borrowed as a contiguous slice in feature order.
pub mod matrix;

pub use matrix::{Array2, ShapeError};

/// Dot product of two equal-length slices.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Squared Euclidean distance between two equal-length slices.
#[inline]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
