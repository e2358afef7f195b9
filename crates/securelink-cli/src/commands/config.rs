//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use securelink_core::config::AppConfig;
use securelink_core::error::AppError;

use crate::output::{self, KeyValue, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration sources
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path, env)?;
            output::print_rows(&settings(&config), &config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path, env) {
            Ok(config) => {
                output::print_success(&format!(
                    "Configuration '{config_path}' ({env}) is valid"
                ));
                println!("  Server: {}", config.bind_address());
                println!("  Algorithm: {}", config.link.algorithm);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Flattens the configuration into displayable rows.
fn settings(config: &AppConfig) -> Vec<KeyValue> {
    let cors = &config.server.cors;
    vec![
        KeyValue::new("server.host", &config.server.host),
        KeyValue::new("server.port", config.server.port),
        KeyValue::new(
            "server.request_timeout_seconds",
            config.server.request_timeout_seconds,
        ),
        KeyValue::new("server.cors.allowed_origins", cors.allowed_origins.join(", ")),
        KeyValue::new("server.cors.allowed_methods", cors.allowed_methods.join(", ")),
        KeyValue::new("server.cors.allowed_headers", cors.allowed_headers.join(", ")),
        KeyValue::new("server.cors.max_age_seconds", cors.max_age_seconds),
        KeyValue::new("link.algorithm", config.link.algorithm),
        KeyValue::new("link.reject_expired", config.link.reject_expired),
        KeyValue::new("logging.level", &config.logging.level),
        KeyValue::new("logging.format", &config.logging.format),
    ]
}
