//! Integration tests for secure link generation over HTTP.

mod helpers;

use axum::http::StatusCode;
use securelink_core::config::{AppConfig, DigestAlgorithm};

const STACKOVERFLOW_B64: &str = "aHR0cDovL3N0YWNrb3ZlcmZsb3cuY29tL3NlYXJjaD9xPXF1ZXN0aW9u=";

#[tokio::test]
async fn test_query_endpoint_hash_hex() {
    let app = helpers::TestApp::with_algorithm(DigestAlgorithm::HashHex);

    let response = app
        .get(&format!(
            "/?t=1516741096&u={STACKOVERFLOW_B64}&ip=127.0.0.1&p=password"
        ))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type().starts_with("text/plain"));
    assert_eq!(
        response.text,
        "http://stackoverflow.com/search?q=question&md5=560e6b3ade697e2fd86b657ad3ade7de"
    );
}

#[tokio::test]
async fn test_query_endpoint_hash_string() {
    let app = helpers::TestApp::with_algorithm(DigestAlgorithm::HashString);

    let response = app
        .get("/?t=2147483647&u=L3MvbGluaw==&ip=127.0.0.1&p=password")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.text,
        "/s/link?md5=FbRZ_kL2P7SJMI6hCxS11Q&expires=2147483647"
    );
}

#[tokio::test]
async fn test_query_endpoint_restores_plus_in_base64() {
    let app = helpers::TestApp::new();

    let response = app
        .get("/?t=1700000000&u=L2F+dXNlci9maWxl&ip=10.0.0.1&p=s")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.text,
        "/a~user/file?md5=Ti5FRf9pfEDuI-CIRdJi4A&expires=1700000000"
    );
}

#[tokio::test]
async fn test_missing_expires_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .get(&format!("/?u={STACKOVERFLOW_B64}&ip=127.0.0.1&p=password"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["type"], "PARAMETERS_ERROR");
    let message = response.body["message"].as_str().unwrap();
    assert_eq!(
        message.lines().next(),
        Some("expires: Is not correct timestamp (positive integer)")
    );
    assert_eq!(message.lines().count(), 1);
}

#[tokio::test]
async fn test_every_missing_parameter_is_reported() {
    let app = helpers::TestApp::new();

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body["message"].as_str().unwrap();
    let parameters: Vec<&str> = message
        .lines()
        .map(|line| line.split(':').next().unwrap())
        .collect();
    assert_eq!(parameters, ["expires", "url", "ip_address", "password"]);
}

#[tokio::test]
async fn test_undecodable_url_is_reported_as_invalid_url() {
    let app = helpers::TestApp::new();

    let response = app
        .get("/?t=1516741096&u=%25%25%25&ip=127.0.0.1&p=password")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "url: Is not correct url");
}

#[tokio::test]
async fn test_ipv6_client_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .get(&format!("/?t=1516741096&u={STACKOVERFLOW_B64}&ip=::1&p=password"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "ip_address: Is not correct ip-address");
}

#[tokio::test]
async fn test_unbalanced_ipv6_host_is_system_error() {
    let app = helpers::TestApp::new();

    let response = app
        .get("/?t=1516741096&u=aHR0cDovL1s6OjEvcGF0aA==&ip=127.0.0.1&p=password")
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["type"], "SYSTEM_ERROR");
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .starts_with("INVALID_URL: ")
    );
}

#[tokio::test]
async fn test_expired_rejected_when_configured() {
    let mut config = AppConfig::default();
    config.link.reject_expired = true;
    let app = helpers::TestApp::with_config(config);

    let response = app
        .get(&format!("/?t=1&u={STACKOVERFLOW_B64}&ip=127.0.0.1&p=password"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "expires: Is expired timestamp");
}

#[tokio::test]
async fn test_json_endpoint_generates_link() {
    let app = helpers::TestApp::with_algorithm(DigestAlgorithm::HashHex);

    let response = app
        .post_json(
            "/api/links",
            serde_json::json!({
                "expires": 1516741096,
                "url": "http://stackoverflow.com/search?q=question",
                "ip_address": "127.0.0.1",
                "password": "password",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(
        response.body["data"]["url"],
        "http://stackoverflow.com/search?q=question&md5=560e6b3ade697e2fd86b657ad3ade7de"
    );
}

#[tokio::test]
async fn test_json_endpoint_wrong_types_are_parameters_errors() {
    let app = helpers::TestApp::new();

    let response = app
        .post_json(
            "/api/links",
            serde_json::json!({
                "expires": "tomorrow",
                "url": "/s/link",
                "ip_address": "127.0.0.1",
                "password": 42,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "expires: Is not correct timestamp (positive integer)\npassword: Is not string"
    );
}

#[tokio::test]
async fn test_json_endpoint_malformed_body() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/links", Some("{not json".to_string()))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["type"], "PARAMETERS_ERROR");
}

#[tokio::test]
async fn test_unknown_route_is_resource_error() {
    let app = helpers::TestApp::new();

    let response = app.get("/nope").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["type"], "RESOURCE_ERROR");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/health").await;

    assert!(response.headers.contains_key("x-request-id"));
}
