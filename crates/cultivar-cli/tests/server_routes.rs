//! HTTP tests for the form routes, driven through the router with `oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use cultivar_classifiers::artifact::ArtifactBundle;
use cultivar_cli::serve::server::{create_router, AppState};

fn create_test_app() -> Router {
    let artifact = serde_json::json!({
        "model": {
            "kind": "linear",
            "coefficients": [[1.0, 0.0], [0.0, 1.0], [-1.0, -1.0]],
            "intercepts": [0.0, 0.0, 0.0]
        },
        "scaler": { "mean": [12.5, 3.0], "scale": [1.0, 1.0] },
        "features": ["alcohol", "malic_acid"],
        "feature_bounds": {
            "alcohol": { "min": 10.0, "max": 15.0 },
            "malic_acid": { "min": 0.74, "max": 5.8 }
        }
    });
    let bundle = ArtifactBundle::from_json_str(&artifact.to_string()).expect("test artifact");
    create_router(AppState::new(Arc::new(bundle)))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("test");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

async fn post_form(body: &str) -> (StatusCode, String) {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("test"),
        )
        .await
        .expect("test");
    let status = response.status();
    (status, body_text(response).await)
}

#[tokio::test]
async fn get_renders_empty_form() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("test"))
        .await
        .expect("test");
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains(r#"name="alcohol""#));
    assert!(page.contains(r#"name="malic_acid""#));
    assert!(page.contains("Range: 10.00 to 15.00"));
    assert!(!page.contains(r#"class="result""#));
    assert!(!page.contains(r#"class="error""#));
}

#[tokio::test]
async fn valid_submission_shows_prediction() {
    let (status, page) = post_form("alcohol=14.0&malic_acid=2.0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Cultivar 1"), "{page}");
    assert!(!page.contains(r#"class="error""#));
    assert!(page.contains(r#"value="14.0""#));
}

#[tokio::test]
async fn out_of_range_submission_shows_error() {
    let (status, page) = post_form("alcohol=50.0&malic_acid=2.0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Alcohol must be between 10.00 and 15.00"));
    assert!(!page.contains(r#"class="result""#));
}

#[tokio::test]
async fn non_numeric_submission_shows_parse_error() {
    let (status, page) = post_form("alcohol=strong&malic_acid=2.0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("could not convert string to float: &#39;strong&#39;")
        || page.contains("could not convert string to float: 'strong'"));
    assert!(!page.contains(r#"class="result""#));
}

#[tokio::test]
async fn missing_field_shows_error() {
    let (_, page) = post_form("alcohol=13.0").await;
    assert!(page.contains("Missing value for Malic Acid"));
}

#[tokio::test]
async fn wrong_content_type_still_renders_page() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .expect("test"),
        )
        .await
        .expect("test");
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Invalid form submission"));
    assert!(page.contains(r#"name="alcohol""#));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = create_test_app()
        .oneshot(Request::builder().uri("/predict").body(Body::empty()).expect("test"))
        .await
        .expect("test");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
