//! SecureLink Server
//!
//! Main entry point that loads configuration, initializes logging, and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use securelink_core::config::{AppConfig, DEFAULT_CONFIG_BASE};
use securelink_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting SecureLink v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = securelink_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("SECURELINK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_BASE.to_string());
    let env = std::env::var("SECURELINK_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
