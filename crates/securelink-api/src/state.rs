//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use securelink_core::config::AppConfig;
use securelink_service::SecureLinkService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything is
/// read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Secure link generator
    pub link_service: Arc<SecureLinkService>,
}

impl AppState {
    /// Builds the state from a loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        let link_service = Arc::new(SecureLinkService::new(&config.link));
        Self {
            config: Arc::new(config),
            link_service,
        }
    }
}
