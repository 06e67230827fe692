//! Scaling and classification of validated input.

use std::fmt;

use serde::Serialize;

use crate::artifact::ArtifactBundle;
use crate::error::PredictionError;
use crate::input::FeatureVector;
use crate::math::Array2;
use crate::validation::check_width;

/// Predicted class, stored zero-based and shown one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CultivarLabel(usize);

impl CultivarLabel {
    pub fn from_class_index(index: usize) -> Self {
        Self(index)
    }

    /// 1-based cultivar number as presented to users.
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for CultivarLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cultivar {}", self.number())
    }
}

fn label_for(bundle: &ArtifactBundle, index: usize) -> Result<CultivarLabel, PredictionError> {
    if index >= bundle.n_classes() {
        return Err(PredictionError::ClassOutOfRange {
            index,
            n_classes: bundle.n_classes(),
        });
    }
    Ok(CultivarLabel::from_class_index(index))
}

/// Scale one validated sample and classify it.
pub fn predict(bundle: &ArtifactBundle, input: &FeatureVector) -> Result<CultivarLabel, PredictionError> {
    check_width(bundle.features(), input.as_slice())?;
    let scaled = bundle.scaler().transform_row(input.as_slice())?;
    let index = bundle.model().predict_row(&scaled)?;
    label_for(bundle, index)
}

/// Scale and classify every row of `x`; columns must be in feature order.
pub fn predict_batch(
    bundle: &ArtifactBundle,
    x: &Array2<f64>,
) -> Result<Vec<CultivarLabel>, PredictionError> {
    let scaled = bundle.scaler().transform_all(x)?;
    bundle
        .model()
        .predict(&scaled)?
        .into_iter()
        .map(|index| label_for(bundle, index))
        .collect()
}
