//! Feature standardization with parameters fitted at training time.
//!
//! The scaler only transforms; fitting happens wherever the artifact was
//! produced. Parameters are checked against the feature list once when the
//! artifact is loaded, so `transform_*` only has to guard the row width.

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, PredictionError};
use crate::math::Array2;

/// Standard scaler (per-column mean/scale).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    #[serde(alias = "std")]
    pub scale: Vec<f64>,
}

impl Scaler {
    /// Minimum scale to avoid division by zero when transforming.
    pub const MIN_SCALE: f64 = 1e-12;

    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Identity transform for `n` features.
    pub fn identity(n: usize) -> Self {
        Self {
            mean: vec![0.0; n],
            scale: vec![1.0; n],
        }
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Check the parameters against the declared feature count and clamp
    /// degenerate scales.
    pub fn checked(mut self, n_features: usize) -> Result<Self, ArtifactError> {
        for (what, values) in [("mean", &self.mean), ("scale", &self.scale)] {
            if values.len() != n_features {
                return Err(ArtifactError::ScalerDimension {
                    what,
                    expected: n_features,
                    found: values.len(),
                });
            }
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(ArtifactError::ScalerNotFinite { what, index });
            }
        }
        for (i, s) in self.scale.iter_mut().enumerate() {
            if s.abs() < Self::MIN_SCALE {
                log::warn!("scaler column {i} has near-zero scale {s}; clamping");
                *s = Self::MIN_SCALE;
            }
        }
        Ok(self)
    }

    /// Transform a single sample given in feature order.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if row.len() != self.n_features() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.n_features(),
                found: row.len(),
            });
        }
        row.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .enumerate()
            .map(|(index, (x, (m, s)))| {
                let v = (x - m) / s;
                if v.is_finite() {
                    Ok(v)
                } else {
                    Err(PredictionError::NonFinite { index })
                }
            })
            .collect()
    }

    /// Transform all rows and return a new matrix.
    pub fn transform_all(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictionError> {
        let mut out = Vec::with_capacity(x.nrows() * x.ncols());
        for row in x.rows() {
            out.extend(self.transform_row(row)?);
        }
        Array2::from_shape_vec((x.nrows(), self.n_features()), out).map_err(|_| {
            PredictionError::DimensionMismatch {
                expected: self.n_features(),
                found: x.ncols(),
            }
        })
    }
}
