//! Integration tests for the health endpoint.

mod helpers;

use axum::http::StatusCode;
use securelink_core::config::DigestAlgorithm;

#[tokio::test]
async fn test_health_check() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["algorithm"], "hash_string");
}

#[tokio::test]
async fn test_health_reports_configured_algorithm() {
    let app = helpers::TestApp::with_algorithm(DigestAlgorithm::HashHex);

    let response = app.get("/api/health").await;

    assert_eq!(response.body["data"]["algorithm"], "hash_hex");
    assert!(response.body["data"]["version"].is_string());
}
