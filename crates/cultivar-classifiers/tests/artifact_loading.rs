//! Integration tests for loading artifact bundles from disk.

mod common;

use cultivar_classifiers::artifact::load_artifact;
use cultivar_classifiers::error::ArtifactError;

#[test]
fn loads_artifact_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_artifact(&dir, &common::small_artifact());

    let bundle = load_artifact(&path).unwrap();
    assert_eq!(bundle.features().len(), 5);
    assert_eq!(bundle.n_classes(), 3);
    assert_eq!(bundle.model().name(), "nearest_centroid");
}

#[test]
fn missing_file_is_an_io_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_artifact(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn corrupt_file_is_a_parse_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, b"\x00\x01 definitely not json").unwrap();
    let err = load_artifact(&path).unwrap_err();
    match err {
        ArtifactError::Json { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn artifact_without_scaler_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = common::small_artifact();
    value.as_object_mut().unwrap().remove("scaler");
    let path = common::write_artifact(&dir, &value);
    let err = load_artifact(&path).unwrap_err();
    assert_eq!(err.to_string(), "artifact is missing the `scaler` part");
}

#[test]
fn shipped_artifact_loads() {
    let bundle = load_artifact(common::shipped_artifact_path()).unwrap();
    assert_eq!(bundle.features().len(), 13);
    assert_eq!(bundle.n_classes(), 3);
    assert_eq!(bundle.features()[0].name, "alcohol");
    assert_eq!(bundle.features()[12].name, "proline");
}
