use crate::error::{ArtifactError, PredictionError};
use crate::math::{squared_distance, Array2};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::parameter_matrix;

/// Nearest-centroid classifier; row `i` of `centroids` is class `i`.
#[derive(Debug, Clone)]
pub struct NearestCentroidClassifier {
    centroids: Array2<f64>,
}

impl NearestCentroidClassifier {
    const KIND: &'static str = "nearest_centroid";

    pub fn new(centroids: Vec<Vec<f64>>) -> Result<Self, ArtifactError> {
        Ok(Self {
            centroids: parameter_matrix(Self::KIND, "centroids", centroids)?,
        })
    }
}

impl ClassifierModel for NearestCentroidClassifier {
    fn n_features(&self) -> usize {
        self.centroids.ncols()
    }

    fn n_classes(&self) -> usize {
        self.centroids.nrows()
    }

    fn predict_row(&self, x: &[f64]) -> Result<usize, PredictionError> {
        let mut best = (0, f64::INFINITY);
        for (class, c) in self.centroids.rows().enumerate() {
            let d = squared_distance(c, x);
            if d < best.1 {
                best = (class, d);
            }
        }
        Ok(best.0)
    }

    fn name(&self) -> &str {
        Self::KIND
    }
}
