pub mod centroid;
pub mod knn;
pub mod linear;

pub mod classifier_trait;
pub mod factory;

pub use classifier_trait::ClassifierModel;

use crate::error::ArtifactError;
use crate::math::Array2;

/// Pack nested parameter rows into a matrix, rejecting empty, ragged or
/// non-finite input.
pub(crate) fn parameter_matrix(
    kind: &'static str,
    what: &str,
    rows: Vec<Vec<f64>>,
) -> Result<Array2<f64>, ArtifactError> {
    let invalid = |reason: String| ArtifactError::InvalidModel { kind, reason };
    if rows.is_empty() || rows[0].is_empty() {
        return Err(invalid(format!("{what} are empty")));
    }
    let m = Array2::from_rows(rows).map_err(|e| invalid(format!("{what}: {e}")))?;
    if m.as_slice().iter().any(|v| !v.is_finite()) {
        return Err(invalid(format!("{what} contain non-finite values")));
    }
    Ok(m)
}
