use serde::{Deserialize, Serialize};

/// Serialized classifier parameters as stored in the artifact `model` part.
///
/// All variants are inference-only: the parameters were fitted elsewhere and
/// are consumed as-is.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelType {
    /// One score per class, `W.x + b`. A single row means a binary model.
    Linear {
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
    /// Majority vote over the `k` closest stored samples.
    Knn {
        k: usize,
        samples: Vec<Vec<f64>>,
        labels: Vec<usize>,
    },
    /// Closest class centroid wins.
    NearestCentroid { centroids: Vec<Vec<f64>> },
}

impl ModelType {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelType::Linear { .. } => "linear",
            ModelType::Knn { .. } => "knn",
            ModelType::NearestCentroid { .. } => "nearest_centroid",
        }
    }
}
