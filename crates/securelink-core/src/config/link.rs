//! Secure link generation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Digest derivation used when generating secure links.
///
/// Selected once at startup; both variants are MD5 based and feed the
/// same `expires + url + ip + "=" + password` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestAlgorithm {
    /// Full URL (query included), URL-safe base64 token without padding.
    /// The expiry is echoed into the composed URL.
    #[default]
    HashString,
    /// Query-stripped URL, lowercase hex token. Only the token is added
    /// to the composed URL.
    HashHex,
}

impl DigestAlgorithm {
    /// Returns the configuration string for this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HashString => "hash_string",
            Self::HashHex => "hash_hex",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "hash_string" => Ok(Self::HashString),
            "hash_hex" => Ok(Self::HashHex),
            _ => Err(AppError::configuration(format!(
                "Invalid digest algorithm: '{s}'. Expected one of: hash_string, hash_hex"
            ))),
        }
    }
}

/// Settings for the secure link generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Digest algorithm.
    #[serde(default)]
    pub algorithm: DigestAlgorithm,
    /// Reject `expires` values already in the past at generation time.
    #[serde(default)]
    pub reject_expired: bool,
}
