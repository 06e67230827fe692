use std::path::PathBuf;

use thiserror::Error;

use crate::validation::display_name;

/// Failures while loading or checking the artifact bundle. All of these are
/// fatal at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact is missing the `{0}` part")]
    MissingPart(&'static str),
    #[error("artifact declares no features")]
    NoFeatures,
    #[error("feature `{0}` is declared more than once")]
    DuplicateFeature(String),
    #[error("no bounds for feature `{0}`")]
    MissingBounds(String),
    #[error("invalid bounds for feature `{feature}`: min {min} max {max}")]
    InvalidBounds { feature: String, min: f64, max: f64 },
    #[error("scaler has {found} {what} entries, expected {expected}")]
    ScalerDimension {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("scaler {what} entry {index} is not finite")]
    ScalerNotFinite { what: &'static str, index: usize },
    #[error("model expects {found} features, artifact declares {expected}")]
    ModelDimension { expected: usize, found: usize },
    #[error("invalid {kind} model: {reason}")]
    InvalidModel { kind: &'static str, reason: String },
}

/// A form field that could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Missing value for {}", display_name(.feature))]
    Missing { feature: String },
    #[error("could not convert string to float: '{raw}'")]
    NotANumber { feature: String, raw: String },
}

/// The first feature found outside its inclusive bounds.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} must be between {min:.2} and {max:.2}", display_name(.feature))]
pub struct ValidationError {
    pub feature: String,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("expected {expected} feature values, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("scaled value for feature {index} is not finite")]
    NonFinite { index: usize },
    #[error("score for class {class} is not finite")]
    NonFiniteScore { class: usize },
    #[error("neighbour search failed: {0}")]
    NeighbourSearch(String),
    #[error("classifier returned class {index} but only {n_classes} classes exist")]
    ClassOutOfRange { index: usize, n_classes: usize },
}

/// Everything that can go wrong while handling one submission. The
/// `Display` output is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}
