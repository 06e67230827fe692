//! cultivar-classifiers: inference-only wine cultivar prediction.
//!
//! This crate loads a trained-model artifact (classifier, scaler, ordered
//! feature list and per-feature bounds), validates submitted measurements
//! against the bounds and maps the classifier output to a cultivar label.
//!
//! The artifact is checked once at load time. After that nothing is looked
//! up by name and nothing is mutated, so a loaded bundle can be shared by
//! any number of concurrent requests.
pub mod artifact;
pub mod config;
pub mod error;
pub mod handler;
pub mod input;
pub mod io;
pub mod math;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod validation;
