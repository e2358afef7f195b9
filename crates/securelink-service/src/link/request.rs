//! Secure link request validation.

use std::fmt;
use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;

use securelink_core::config::LinkConfig;
use securelink_core::types::{InvalidRequest, RequestObject};

/// Optional scheme, then URL-safe characters. Bare paths such as `/a/b`
/// match; `//host` without a following segment does not.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:http|ftp)s?://)?[\w.\-]?(?:.[\w.\-]+)+[\w\-._:/?\#\[\]@!$\&'()*+,;=]+$")
        .expect("URL pattern is valid")
});

static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("IPv4 pattern is valid")
});

const EXPIRES_INVALID: &str = "Is not correct timestamp (positive integer)";
const EXPIRES_PAST: &str = "Is expired timestamp";
const URL_INVALID: &str = "Is not correct url";
const IP_INVALID: &str = "Is not correct ip-address";
const PASSWORD_INVALID: &str = "Is not string";

/// Raw, untrusted input for secure link generation.
///
/// `None` stands for a parameter that was absent or could not be decoded
/// by the transport.
#[derive(Clone, Default)]
pub struct RawLinkParams {
    /// Expiry as a Unix timestamp.
    pub expires: Option<i64>,
    /// Target URL or path.
    pub url: Option<String>,
    /// Client IPv4 address.
    pub ip_address: Option<String>,
    /// Shared secret.
    pub password: Option<String>,
}

impl fmt::Debug for RawLinkParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawLinkParams")
            .field("expires", &self.expires)
            .field("url", &self.url)
            .field("ip_address", &self.ip_address)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// A fully validated secure link request.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureLinkRequest {
    expires: u64,
    url: String,
    ip_address: String,
    password: String,
}

impl SecureLinkRequest {
    /// Expiry as a Unix timestamp.
    pub fn expires(&self) -> u64 {
        self.expires
    }

    /// Target URL or path.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Client IPv4 address.
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// Shared secret.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for SecureLinkRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureLinkRequest")
            .field("expires", &self.expires)
            .field("url", &self.url)
            .field("ip_address", &self.ip_address)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validates raw parameters into a [`SecureLinkRequest`].
#[derive(Debug, Clone, Default)]
pub struct LinkValidator {
    /// Reject timestamps earlier than the current second.
    reject_expired: bool,
}

impl LinkValidator {
    /// Creates a validator from link configuration.
    pub fn new(config: &LinkConfig) -> Self {
        Self {
            reject_expired: config.reject_expired,
        }
    }

    /// Validates against the current wall-clock time.
    pub fn validate(&self, raw: RawLinkParams) -> RequestObject<SecureLinkRequest> {
        self.validate_at(raw, Utc::now().timestamp())
    }

    /// Validates with `now` as the reference Unix time.
    ///
    /// Every field is checked; errors are reported in the order
    /// `expires`, `url`, `ip_address`, `password`.
    pub fn validate_at(&self, raw: RawLinkParams, now: i64) -> RequestObject<SecureLinkRequest> {
        let mut invalid = InvalidRequest::new();

        let expires = match raw.expires {
            Some(value) if value >= 0 => {
                if self.reject_expired && value < now {
                    invalid.add_error("expires", EXPIRES_PAST);
                    None
                } else {
                    u64::try_from(value).ok()
                }
            }
            _ => {
                invalid.add_error("expires", EXPIRES_INVALID);
                None
            }
        };

        let url = raw.url.filter(|url| URL_PATTERN.is_match(url));
        if url.is_none() {
            invalid.add_error("url", URL_INVALID);
        }

        let ip_address = raw.ip_address.filter(|ip| IPV4_PATTERN.is_match(ip));
        if ip_address.is_none() {
            invalid.add_error("ip_address", IP_INVALID);
        }

        if raw.password.is_none() {
            invalid.add_error("password", PASSWORD_INVALID);
        }

        match (expires, url, ip_address, raw.password) {
            (Some(expires), Some(url), Some(ip_address), Some(password))
                if !invalid.has_errors() =>
            {
                RequestObject::Valid(SecureLinkRequest {
                    expires,
                    url,
                    ip_address,
                    password,
                })
            }
            _ => RequestObject::Invalid(invalid),
        }
    }
}
