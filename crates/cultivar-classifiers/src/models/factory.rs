use crate::config::ModelType;
use crate::error::ArtifactError;
use crate::models::centroid::NearestCentroidClassifier;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::knn::KnnClassifier;
use crate::models::linear::LinearClassifier;

/// Build a boxed classifier model from its serialized parameters.
pub fn build_model(params: ModelType) -> Result<Box<dyn ClassifierModel>, ArtifactError> {
    let model: Box<dyn ClassifierModel> = match params {
        ModelType::Linear {
            coefficients,
            intercepts,
        } => Box::new(LinearClassifier::new(coefficients, intercepts)?),
        ModelType::Knn { k, samples, labels } => Box::new(KnnClassifier::new(k, samples, labels)?),
        ModelType::NearestCentroid { centroids } => {
            Box::new(NearestCentroidClassifier::new(centroids)?)
        }
    };
    Ok(model)
}
