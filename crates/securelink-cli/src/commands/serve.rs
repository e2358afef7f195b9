//! Start the SecureLink server.

use clap::Args;

use securelink_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path, env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting SecureLink server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Algorithm: {}", config.link.algorithm);

    securelink_api::run_server(config).await
}
