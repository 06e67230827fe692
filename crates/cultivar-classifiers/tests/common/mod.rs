#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{json, Value};

/// Sample artifact shipped at the workspace root.
pub fn shipped_artifact_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../model/wine_cultivar_model.json")
}

/// Five-feature nearest-centroid bundle built from the wine class means.
pub fn small_artifact() -> Value {
    json!({
        "model": {
            "kind": "nearest_centroid",
            "centroids": [
                [0.91, -0.29, 0.95, 0.20, 1.17],
                [-0.89, -0.37, 0.05, -0.85, -0.72],
                [0.19, 0.88, -1.25, 1.01, -0.37]
            ]
        },
        "scaler": {
            "mean": [13.0, 2.34, 2.03, 5.06, 746.9],
            "scale": [0.81, 1.12, 1.0, 2.32, 314.9]
        },
        "features": ["alcohol", "malic_acid", "flavanoids", "color_intensity", "proline"],
        "feature_bounds": {
            "alcohol": { "min": 10.0, "max": 15.0 },
            "malic_acid": { "min": 0.74, "max": 5.8 },
            "flavanoids": { "min": 0.34, "max": 5.08 },
            "color_intensity": { "min": 1.28, "max": 13.0 },
            "proline": { "min": 278.0, "max": 1680.0 }
        }
    })
}

pub fn write_artifact(dir: &tempfile::TempDir, value: &Value) -> PathBuf {
    let path = dir.path().join("model.json");
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
