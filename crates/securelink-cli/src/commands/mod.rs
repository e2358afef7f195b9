//! CLI command definitions and dispatch.

pub mod config;
pub mod generate;
pub mod serve;

use clap::{Parser, Subcommand};

use securelink_core::config::AppConfig;
use securelink_core::error::AppError;

use crate::output::OutputFormat;

/// SecureLink: signed, expiring, IP-bound links
#[derive(Debug, Parser)]
#[command(name = "securelink", version, about, long_about = None)]
pub struct Cli {
    /// Path to the base configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Configuration environment overlay loaded next to the base file
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a secure link offline
    Generate(generate::GenerateArgs),
    /// Start the SecureLink server
    Serve(serve::ServeArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Generate(args) => {
                generate::execute(args, &self.config, &self.env, self.format)
            }
            Commands::Serve(args) => serve::execute(args, &self.config, &self.env).await,
            Commands::Config(args) => config::execute(args, &self.config, &self.env, self.format),
        }
    }
}

/// Helper: load configuration from the base file and environment overlay
pub fn load_config(config_path: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path, env)
}
