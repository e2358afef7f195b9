//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use securelink_api::{AppState, build_app};
use securelink_core::config::{AppConfig, DigestAlgorithm};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application using the given digest algorithm
    pub fn with_algorithm(algorithm: DigestAlgorithm) -> Self {
        let mut config = AppConfig::default();
        config.link.algorithm = algorithm;
        Self::with_config(config)
    }

    /// Create a test application from an explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        let router = build_app(AppState::new(config.clone()));
        Self { router, config }
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body.to_string())).await
    }

    /// Send a request with an optional raw body
    pub async fn request(&self, method: &str, path: &str, body: Option<String>) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.unwrap_or_default()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
}

impl TestResponse {
    /// Content type header, empty when absent
    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}
