//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod link;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::link::{DigestAlgorithm, LinkConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Default base configuration file, without extension.
pub const DEFAULT_CONFIG_BASE: &str = "config/default";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
/// Every section has defaults, so an empty source set yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
    /// Secure link generation settings.
    #[serde(default)]
    pub link: LinkConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default location for an environment.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay, and
    /// environment variables prefixed with `SECURELINK__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from(DEFAULT_CONFIG_BASE, env)
    }

    /// Load configuration from an explicit base file.
    ///
    /// The environment overlay is looked up next to the base file. Both
    /// files are optional.
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let base = base.strip_suffix(".toml").unwrap_or(base);
        let overlay = Path::new(base).with_file_name(env);

        tracing::debug!(base = %base, overlay = %overlay.display(), "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&overlay.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("SECURELINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.link.algorithm, DigestAlgorithm::HashString);
        assert!(!config.link.reject_expired);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[link]\nalgorithm = \"hash_hex\"\nreject_expired = true\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.link.algorithm, DigestAlgorithm::HashHex);
        assert!(config.link.reject_expired);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_zero_port_fails_validation() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let config = AppConfig::load_from("does/not/exist", "nowhere").unwrap();
        assert_eq!(config.server.request_timeout_seconds, 30);
    }
}
