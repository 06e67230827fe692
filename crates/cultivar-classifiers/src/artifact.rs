//! Loading and checking the trained-model artifact bundle.
//!
//! The bundle is a single JSON document with four parts:
//!
//! * `model`: classifier parameters, tagged by `kind` (see [`ModelType`]);
//! * `scaler`: per-feature `mean` and `scale`;
//! * `features`: ordered feature names, which fix the input vector order;
//! * `feature_bounds`: `{ "name": { "min": .., "max": .. } }` for every feature.
//!
//! Everything is cross-checked once here so that request handling never has
//! to look anything up by name.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ModelType;
use crate::error::ArtifactError;
use crate::models::factory::build_model;
use crate::models::ClassifierModel;
use crate::preprocessing::Scaler;

/// Location of the artifact relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "model/wine_cultivar_model.json";

/// Inclusive valid range of a feature, taken from the training data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBounds {
    pub min: f64,
    pub max: f64,
}

impl FeatureBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One input feature with its bounds, in model order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSpec {
    pub name: String,
    pub bounds: FeatureBounds,
}

impl FeatureSpec {
    pub fn new(name: impl Into<String>, bounds: FeatureBounds) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

/// The on-disk layout. Every part is optional here so a missing part can be
/// reported by name rather than as a generic parse error.
#[derive(Debug, Deserialize)]
struct RawArtifact {
    model: Option<ModelType>,
    scaler: Option<Scaler>,
    features: Option<Vec<String>>,
    feature_bounds: Option<HashMap<String, FeatureBounds>>,
}

/// Immutable, validated model bundle shared by every request.
pub struct ArtifactBundle {
    model: Box<dyn ClassifierModel>,
    scaler: Scaler,
    features: Vec<FeatureSpec>,
}

impl fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactBundle")
            .field("model", &self.model.name())
            .field("n_classes", &self.model.n_classes())
            .field("features", &self.feature_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Read the artifact at `path` and check it for internal consistency.
pub fn load_artifact<P: AsRef<Path>>(path: P) -> Result<ArtifactBundle, ArtifactError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle = ArtifactBundle::from_json_str(&content).map_err(|e| match e {
        ArtifactError::Json { source, .. } => ArtifactError::Json {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    log::info!(
        "Loaded {} model with {} classes and {} features from {}",
        bundle.model.name(),
        bundle.n_classes(),
        bundle.features.len(),
        path.display()
    );
    Ok(bundle)
}

impl ArtifactBundle {
    /// Build a bundle from an already constructed model. Used by
    /// [`ArtifactBundle::from_parts`] and handy for tests with stub models.
    pub fn new(
        model: Box<dyn ClassifierModel>,
        scaler: Scaler,
        features: Vec<FeatureSpec>,
    ) -> Result<Self, ArtifactError> {
        if features.is_empty() {
            return Err(ArtifactError::NoFeatures);
        }
        let mut seen = HashSet::with_capacity(features.len());
        for spec in &features {
            if !seen.insert(spec.name.as_str()) {
                return Err(ArtifactError::DuplicateFeature(spec.name.clone()));
            }
            let FeatureBounds { min, max } = spec.bounds;
            if !(min.is_finite() && max.is_finite() && min <= max) {
                return Err(ArtifactError::InvalidBounds {
                    feature: spec.name.clone(),
                    min,
                    max,
                });
            }
        }
        let scaler = scaler.checked(features.len())?;
        if model.n_features() != features.len() {
            return Err(ArtifactError::ModelDimension {
                expected: features.len(),
                found: model.n_features(),
            });
        }
        if model.n_classes() == 0 {
            return Err(ArtifactError::InvalidModel {
                kind: "classifier",
                reason: "model has no classes".to_string(),
            });
        }
        Ok(Self {
            model,
            scaler,
            features,
        })
    }

    /// Resolve the four serialized parts into a bundle, pairing each feature
    /// with its bounds in declaration order.
    pub fn from_parts(
        model: ModelType,
        scaler: Scaler,
        features: Vec<String>,
        mut feature_bounds: HashMap<String, FeatureBounds>,
    ) -> Result<Self, ArtifactError> {
        let mut specs = Vec::with_capacity(features.len());
        for name in features {
            // Duplicates are reported by `new`; only the first can take the bounds.
            let bounds = match feature_bounds.remove(&name) {
                Some(b) => b,
                None if specs.iter().any(|s: &FeatureSpec| s.name == name) => {
                    return Err(ArtifactError::DuplicateFeature(name))
                }
                None => return Err(ArtifactError::MissingBounds(name)),
            };
            specs.push(FeatureSpec { name, bounds });
        }
        let mut unused: Vec<_> = feature_bounds.into_keys().collect();
        if !unused.is_empty() {
            unused.sort();
            log::warn!("Ignoring bounds for undeclared features: {}", unused.join(", "));
        }
        let model = build_model(model)?;
        Self::new(model, scaler, specs)
    }

    /// Parse a bundle from its JSON text. Parse errors carry an empty path;
    /// [`load_artifact`] fills it in.
    pub fn from_json_str(content: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(content).map_err(|source| {
            ArtifactError::Json {
                path: Default::default(),
                source,
            }
        })?;
        let model = raw.model.ok_or(ArtifactError::MissingPart("model"))?;
        let scaler = raw.scaler.ok_or(ArtifactError::MissingPart("scaler"))?;
        let features = raw.features.ok_or(ArtifactError::MissingPart("features"))?;
        let bounds = raw
            .feature_bounds
            .ok_or(ArtifactError::MissingPart("feature_bounds"))?;
        Self::from_parts(model, scaler, features, bounds)
    }

    pub fn features(&self) -> &[FeatureSpec] {
        &self.features
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.features.iter().map(|f| f.name.as_str())
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn model(&self) -> &dyn ClassifierModel {
        self.model.as_ref()
    }

    pub fn n_classes(&self) -> usize {
        self.model.n_classes()
    }

    pub fn summary(&self) -> ArtifactSummary {
        ArtifactSummary {
            model: self.model.name().to_string(),
            n_classes: self.n_classes(),
            features: self.features.clone(),
        }
    }
}

/// Serializable overview of a loaded bundle.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactSummary {
    pub model: String,
    pub n_classes: usize,
    pub features: Vec<FeatureSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artifact_json() -> serde_json::Value {
        json!({
            "model": {
                "kind": "linear",
                "coefficients": [[1.0, 0.0], [0.0, 1.0], [-1.0, -1.0]],
                "intercepts": [0.0, 0.0, 0.0]
            },
            "scaler": { "mean": [12.0, 2.0], "scale": [1.0, 1.0] },
            "features": ["alcohol", "malic_acid"],
            "feature_bounds": {
                "malic_acid": { "min": 0.5, "max": 6.0 },
                "alcohol": { "min": 10.0, "max": 15.0 }
            }
        })
    }

    #[test]
    fn parts_keep_feature_order() {
        let bundle = ArtifactBundle::from_json_str(&artifact_json().to_string()).unwrap();
        let names: Vec<_> = bundle.feature_names().collect();
        assert_eq!(names, vec!["alcohol", "malic_acid"]);
        assert_eq!(bundle.features()[1].bounds, FeatureBounds::new(0.5, 6.0));
        assert_eq!(bundle.n_classes(), 3);
    }

    #[test]
    fn each_missing_part_is_named() {
        for part in ["model", "scaler", "features", "feature_bounds"] {
            let mut v = artifact_json();
            v.as_object_mut().unwrap().remove(part);
            let err = ArtifactBundle::from_json_str(&v.to_string()).unwrap_err();
            assert!(
                matches!(err, ArtifactError::MissingPart(p) if p == part),
                "{part}: {err}"
            );
        }
    }

    #[test]
    fn feature_without_bounds_is_rejected() {
        let mut v = artifact_json();
        v["feature_bounds"].as_object_mut().unwrap().remove("alcohol");
        let err = ArtifactBundle::from_json_str(&v.to_string()).unwrap_err();
        assert!(matches!(err, ArtifactError::MissingBounds(ref f) if f == "alcohol"));
    }

    #[test]
    fn duplicate_feature_is_rejected() {
        let mut v = artifact_json();
        v["features"] = json!(["alcohol", "alcohol"]);
        let err = ArtifactBundle::from_json_str(&v.to_string()).unwrap_err();
        assert!(matches!(err, ArtifactError::DuplicateFeature(_)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut v = artifact_json();
        v["feature_bounds"]["alcohol"] = json!({ "min": 15.0, "max": 10.0 });
        let err = ArtifactBundle::from_json_str(&v.to_string()).unwrap_err();
        assert!(matches!(err, ArtifactError::InvalidBounds { .. }));
    }

    #[test]
    fn scaler_width_must_match_features() {
        let mut v = artifact_json();
        v["scaler"] = json!({ "mean": [0.0], "scale": [1.0] });
        let err = ArtifactBundle::from_json_str(&v.to_string()).unwrap_err();
        assert!(matches!(err, ArtifactError::ScalerDimension { what: "mean", expected: 2, found: 1 }));
    }

    #[test]
    fn model_width_must_match_features() {
        let mut v = artifact_json();
        v["model"] = json!({ "kind": "nearest_centroid", "centroids": [[0.0, 0.0, 0.0]] });
        let err = ArtifactBundle::from_json_str(&v.to_string()).unwrap_err();
        assert!(matches!(err, ArtifactError::ModelDimension { expected: 2, found: 3 }));
    }

    #[test]
    fn corrupt_json_is_a_parse_error() {
        let err = ArtifactBundle::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ArtifactError::Json { .. }));
    }
}
