//! Liveness and Middleware Tests

use axum::http::{header, HeaderValue, StatusCode};
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_root_reports_running() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Backend Running!"}));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    app.server
        .get("/api/v1/nothing-here")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_allowed_origin_gets_cors_headers() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/v1/categories")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get("access-control-allow-origin"),
        Some(&HeaderValue::from_static("http://localhost:3000"))
    );
    assert_eq!(
        response.headers().get("access-control-allow-credentials"),
        Some(&HeaderValue::from_static("true"))
    );
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_cors_headers() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/v1/categories")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://evil.example"))
        .await;

    response.assert_status_ok();
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
