//! Request timeout layer.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;

use securelink_core::config::ServerConfig;

/// Builds a layer answering `408` once a request exceeds the configured
/// timeout.
pub fn build_timeout_layer(config: &ServerConfig) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(config.request_timeout_seconds))
}
