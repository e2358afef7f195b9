//! Offline secure link generation.

use clap::Args;
use serde::Serialize;

use securelink_core::config::DigestAlgorithm;
use securelink_core::error::AppError;
use securelink_core::types::{FailureKind, ResponseFailure};
use securelink_service::{RawLinkParams, SecureLinkService};

use crate::output::{self, KeyValue, OutputFormat};

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Expiry as a Unix timestamp
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub expires: i64,

    /// Target URL or path
    #[arg(short, long)]
    pub url: String,

    /// Client IPv4 address
    #[arg(short, long)]
    pub ip: String,

    /// Shared secret
    #[arg(short, long)]
    pub password: String,

    /// Digest algorithm (hash_string or hash_hex); defaults to the configured one
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Reject timestamps that are already in the past
    #[arg(long)]
    pub reject_expired: bool,
}

#[derive(Debug, Serialize)]
struct GeneratedLink<'a> {
    algorithm: DigestAlgorithm,
    expires: i64,
    url: &'a str,
}

/// Execute the generate command
pub fn execute(
    args: &GenerateArgs,
    config_path: &str,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut link_config = super::load_config(config_path, env)?.link;

    if let Some(ref algorithm) = args.algorithm {
        link_config.algorithm = algorithm.parse()?;
    }
    if args.reject_expired {
        link_config.reject_expired = true;
    }

    let service = SecureLinkService::new(&link_config);
    let url = service
        .generate(RawLinkParams {
            expires: Some(args.expires),
            url: Some(args.url.clone()),
            ip_address: Some(args.ip.clone()),
            password: Some(args.password.clone()),
        })
        .map_err(into_app_error)?;

    tracing::debug!(algorithm = %link_config.algorithm, "Generated link from CLI");

    let rows = [
        KeyValue::new("algorithm", link_config.algorithm),
        KeyValue::new("expires", args.expires),
        KeyValue::new("url", &url),
    ];
    let json = GeneratedLink {
        algorithm: link_config.algorithm,
        expires: args.expires,
        url: &url,
    };
    output::print_rows(&rows, &json, format);

    Ok(())
}

/// Maps a use case failure onto the CLI error type.
fn into_app_error(failure: ResponseFailure) -> AppError {
    match failure.kind {
        FailureKind::ParametersError => AppError::validation(failure.message),
        FailureKind::ResourceError => AppError::not_found(failure.message),
        FailureKind::SystemError => AppError::internal(failure.message),
    }
}
