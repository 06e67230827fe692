//! Per-request orchestration: parse, validate, predict.
//!
//! Each submission is handled in isolation. Every failure is turned into a
//! [`RequestError`] whose message is meant for the page, so nothing a user
//! types can take the process down.

use std::collections::HashMap;
use std::sync::Arc;

use crate::artifact::ArtifactBundle;
use crate::error::RequestError;
use crate::input::parse_form;
use crate::pipeline::{predict, CultivarLabel};
use crate::validation::validate_inputs;

/// What a rendered page shows for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    /// No submission yet: empty form.
    AwaitingInput,
    /// Submission accepted and classified.
    Success(CultivarLabel),
    /// Submission rejected; the message is shown instead of a prediction.
    Failed(String),
}

impl RequestState {
    pub fn prediction(&self) -> Option<String> {
        match self {
            RequestState::Success(label) => Some(label.to_string()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<Result<CultivarLabel, RequestError>> for RequestState {
    fn from(result: Result<CultivarLabel, RequestError>) -> Self {
        match result {
            Ok(label) => RequestState::Success(label),
            Err(e) => RequestState::Failed(e.to_string()),
        }
    }
}

/// Holds the shared bundle and answers form submissions against it.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    bundle: Arc<ArtifactBundle>,
}

impl RequestHandler {
    pub fn new(bundle: Arc<ArtifactBundle>) -> Self {
        Self { bundle }
    }

    pub fn bundle(&self) -> &ArtifactBundle {
        &self.bundle
    }

    /// Run one submission through parsing, bounds validation and prediction.
    pub fn evaluate(&self, form: &HashMap<String, String>) -> Result<CultivarLabel, RequestError> {
        let input = parse_form(self.bundle.features(), form)?;
        validate_inputs(self.bundle.features(), input.as_slice())?;
        let label = predict(&self.bundle, &input)?;
        Ok(label)
    }

    /// Like [`RequestHandler::evaluate`], folded into the page state.
    pub fn submit(&self, form: &HashMap<String, String>) -> RequestState {
        let result = self.evaluate(form);
        match &result {
            Ok(label) => log::debug!("Predicted {label}"),
            Err(e) => log::warn!("Rejected submission: {e}"),
        }
        result.into()
    }
}
