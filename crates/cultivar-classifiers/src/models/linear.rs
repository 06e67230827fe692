use crate::error::{ArtifactError, PredictionError};
use crate::math::{dot, Array2};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::parameter_matrix;

/// Linear multi-class classifier: the class with the largest `w.x + b` wins.
///
/// This covers one-vs-rest and multinomial logistic regression as well as
/// linear SVMs, which only differ in how the weights were fitted. A model
/// with a single weight row is binary: class 1 when the score is positive.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    coefficients: Array2<f64>,
    intercepts: Vec<f64>,
}

impl LinearClassifier {
    const KIND: &'static str = "linear";

    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Result<Self, ArtifactError> {
        let coefficients = parameter_matrix(Self::KIND, "coefficients", coefficients)?;
        if intercepts.len() != coefficients.nrows() {
            return Err(ArtifactError::InvalidModel {
                kind: Self::KIND,
                reason: format!(
                    "{} intercepts for {} coefficient rows",
                    intercepts.len(),
                    coefficients.nrows()
                ),
            });
        }
        if intercepts.iter().any(|b| !b.is_finite()) {
            return Err(ArtifactError::InvalidModel {
                kind: Self::KIND,
                reason: "intercepts contain non-finite values".to_string(),
            });
        }
        Ok(Self {
            coefficients,
            intercepts,
        })
    }

    /// Raw per-row scores `w.x + b`.
    pub fn decision_function(&self, x: &[f64]) -> Vec<f64> {
        self.coefficients
            .rows()
            .zip(&self.intercepts)
            .map(|(w, b)| dot(w, x) + b)
            .collect()
    }

    fn is_binary(&self) -> bool {
        self.coefficients.nrows() == 1
    }
}

impl ClassifierModel for LinearClassifier {
    fn n_features(&self) -> usize {
        self.coefficients.ncols()
    }

    fn n_classes(&self) -> usize {
        if self.is_binary() {
            2
        } else {
            self.coefficients.nrows()
        }
    }

    fn predict_row(&self, x: &[f64]) -> Result<usize, PredictionError> {
        let scores = self.decision_function(x);
        if let Some(class) = scores.iter().position(|s| !s.is_finite()) {
            return Err(PredictionError::NonFiniteScore { class });
        }
        if self.is_binary() {
            return Ok(usize::from(scores[0] > 0.0));
        }
        // First maximum wins on ties.
        let mut best = 0;
        for (i, s) in scores.iter().enumerate().skip(1) {
            if *s > scores[best] {
                best = i;
            }
        }
        Ok(best)
    }

    fn name(&self) -> &str {
        Self::KIND
    }
}
