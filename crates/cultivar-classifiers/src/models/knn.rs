//! k-nearest-neighbours over stored, already scaled, training samples.
//!
//! The neighbour query runs on a linfa Ball Tree; the vote is ours.

use linfa_nn::distance::{Distance, L2Dist};
use linfa_nn::{BallTree, NearestNeighbour};
use ndarray::{Array2, ArrayView1};

use crate::error::{ArtifactError, PredictionError};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::parameter_matrix;

#[derive(Debug, Clone)]
pub struct KnnClassifier {
    k: usize,
    samples: Array2<f64>,
    labels: Vec<usize>,
    n_classes: usize,
}

impl KnnClassifier {
    const KIND: &'static str = "knn";

    pub fn new(k: usize, samples: Vec<Vec<f64>>, labels: Vec<usize>) -> Result<Self, ArtifactError> {
        let invalid = |reason: String| ArtifactError::InvalidModel {
            kind: Self::KIND,
            reason,
        };
        let checked = parameter_matrix(Self::KIND, "samples", samples)?;
        if labels.len() != checked.nrows() {
            return Err(invalid(format!(
                "{} labels for {} samples",
                labels.len(),
                checked.nrows()
            )));
        }
        if k == 0 || k > checked.nrows() {
            return Err(invalid(format!("k must be in 1..={}, got {k}", checked.nrows())));
        }
        let samples = Array2::from_shape_vec(checked.shape(), checked.as_slice().to_vec())
            .map_err(|e| invalid(format!("samples: {e}")))?;
        let n_classes = labels.iter().max().map_or(0, |m| m + 1);
        Ok(Self {
            k,
            samples,
            labels,
            n_classes,
        })
    }

    /// Tally `(votes, summed distance)` per class over the `k` nearest samples.
    fn tally(&self, x: &[f64]) -> Result<Vec<(usize, f64)>, PredictionError> {
        let index = BallTree::new()
            .from_batch(&self.samples, L2Dist)
            .map_err(|e| PredictionError::NeighbourSearch(e.to_string()))?;
        let query = ArrayView1::from(x);
        let neighbours = index
            .k_nearest(query, self.k)
            .map_err(|e| PredictionError::NeighbourSearch(e.to_string()))?;

        let mut tally = vec![(0usize, 0.0f64); self.n_classes];
        for (point, idx) in neighbours {
            let label = self.labels[idx];
            tally[label].0 += 1;
            tally[label].1 += L2Dist.distance(point, query);
        }
        Ok(tally)
    }
}

impl ClassifierModel for KnnClassifier {
    fn n_features(&self) -> usize {
        self.samples.ncols()
    }

    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn predict_row(&self, x: &[f64]) -> Result<usize, PredictionError> {
        if x.len() != self.n_features() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.n_features(),
                found: x.len(),
            });
        }
        let tally = self.tally(x)?;

        let mut best = 0;
        for (class, &(votes, dist)) in tally.iter().enumerate().skip(1) {
            let (best_votes, best_dist) = tally[best];
            if votes > best_votes || (votes == best_votes && votes > 0 && dist < best_dist) {
                best = class;
            }
        }
        Ok(best)
    }

    fn name(&self) -> &str {
        Self::KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters() -> KnnClassifier {
        KnnClassifier::new(
            3,
            vec![
                vec![0.0, 0.0],
                vec![0.1, 0.0],
                vec![0.0, 0.1],
                vec![5.0, 5.0],
                vec![5.1, 5.0],
                vec![5.0, 5.1],
            ],
            vec![0, 0, 0, 2, 2, 2],
        )
        .unwrap()
    }

    #[test]
    fn majority_vote_of_nearest() {
        let model = clusters();
        assert_eq!(model.n_classes(), 3);
        assert_eq!(model.predict_row(&[0.2, 0.2]), Ok(0));
        assert_eq!(model.predict_row(&[4.8, 4.9]), Ok(2));
    }

    #[test]
    fn majority_beats_a_single_closer_sample() {
        let model = KnnClassifier::new(
            3,
            vec![vec![0.0], vec![2.0], vec![2.2], vec![9.0]],
            vec![0, 1, 1, 0],
        )
        .unwrap();
        // nearest is class 0, but two of the three neighbours are class 1
        assert_eq!(model.predict_row(&[0.9]), Ok(1));
    }

    #[test]
    fn vote_ties_break_on_distance() {
        let model = KnnClassifier::new(2, vec![vec![0.0], vec![3.0]], vec![1, 0]).unwrap();
        // one vote each; class 0 sample is closer to 2.0
        assert_eq!(model.predict_row(&[2.0]), Ok(0));
        assert_eq!(model.predict_row(&[1.0]), Ok(1));
    }

    #[test]
    fn wrong_width_is_an_error() {
        let model = clusters();
        assert_eq!(
            model.predict_row(&[1.0]),
            Err(PredictionError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn k_must_fit_the_sample_count() {
        assert!(KnnClassifier::new(0, vec![vec![0.0]], vec![0]).is_err());
        assert!(KnnClassifier::new(2, vec![vec![0.0]], vec![0]).is_err());
    }
}
