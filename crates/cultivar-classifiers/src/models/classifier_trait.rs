use std::fmt::Debug;

use crate::error::PredictionError;
use crate::math::Array2;

/// Contract shared by the inference-only classifiers.
///
/// Models are immutable once built and shared across requests, hence the
/// `Send + Sync` bound. Inputs are expected to be scaled already.
pub trait ClassifierModel: Debug + Send + Sync {
    /// Number of input features the model was fitted on.
    fn n_features(&self) -> usize;

    /// Number of distinct classes the model can return.
    fn n_classes(&self) -> usize;

    /// Predict the zero-based class of a single sample of width `n_features`.
    fn predict_row(&self, x: &[f64]) -> Result<usize, PredictionError>;

    /// Predict every row of `x`.
    fn predict(&self, x: &Array2<f64>) -> Result<Vec<usize>, PredictionError> {
        if x.ncols() != self.n_features() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.n_features(),
                found: x.ncols(),
            });
        }
        x.rows().map(|row| self.predict_row(row)).collect()
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
