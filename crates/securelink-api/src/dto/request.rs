//! Request DTOs and their conversion into raw link parameters.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};

use securelink_service::RawLinkParams;

/// Standard alphabet; padding optional, non-zero trailing bits tolerated.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Query string of `GET /`.
///
/// Every field is kept as text so that malformed values reach the
/// validator as absent instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkQuery {
    /// Expiry as a decimal Unix timestamp.
    pub t: Option<String>,
    /// Base64-encoded target URL.
    pub u: Option<String>,
    /// Client IPv4 address.
    pub ip: Option<String>,
    /// Shared secret.
    pub p: Option<String>,
}

impl From<LinkQuery> for RawLinkParams {
    fn from(query: LinkQuery) -> Self {
        Self {
            expires: query.t.as_deref().and_then(parse_timestamp),
            url: query.u.as_deref().and_then(decode_url),
            ip_address: query.ip,
            password: query.p,
        }
    }
}

/// Body of `POST /api/links`.
///
/// Values are taken as raw JSON so a wrongly typed field is reported by the
/// validator like a missing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    /// Expiry as a Unix timestamp.
    #[serde(default)]
    pub expires: Option<serde_json::Value>,
    /// Target URL, not encoded.
    #[serde(default)]
    pub url: Option<serde_json::Value>,
    /// Client IPv4 address.
    #[serde(default)]
    pub ip_address: Option<serde_json::Value>,
    /// Shared secret.
    #[serde(default)]
    pub password: Option<serde_json::Value>,
}

impl From<CreateLinkRequest> for RawLinkParams {
    fn from(body: CreateLinkRequest) -> Self {
        Self {
            expires: body.expires.as_ref().and_then(serde_json::Value::as_i64),
            url: into_string(body.url),
            ip_address: into_string(body.ip_address),
            password: into_string(body.password),
        }
    }
}

fn into_string(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}

/// Parses a decimal timestamp, `None` on any failure.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Decodes a base64 URL parameter into text.
///
/// Form decoding turns `+` into a space, so spaces are mapped back before
/// decoding. Excess trailing `=` are ignored. Returns `None` when the value
/// is not base64 or not UTF-8.
pub fn decode_url(raw: &str) -> Option<String> {
    let restored = raw.trim().replace(' ', "+");
    let bytes = LENIENT_STANDARD
        .decode(restored.trim_end_matches('='))
        .ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_url_padded() {
        assert_eq!(
            decode_url("aHR0cDovL3N0YWNrb3ZlcmZsb3cuY29tL3NlYXJjaD9xPXF1ZXN0aW9u=").as_deref(),
            Some("http://stackoverflow.com/search?q=question")
        );
        assert_eq!(decode_url("L3MvbGluaw==").as_deref(), Some("/s/link"));
        assert_eq!(decode_url("L3MvbGluaw").as_deref(), Some("/s/link"));
    }

    #[test]
    fn test_decode_url_restores_plus() {
        assert_eq!(
            decode_url("aHR0cDovL2EuYi9jP3g9MSZ5PT4 Pw==").as_deref(),
            Some("http://a.b/c?x=1&y=>>?")
        );
    }

    #[test]
    fn test_decode_url_rejects_garbage() {
        assert_eq!(decode_url("%%%"), None);
        assert_eq!(decode_url("//79"), None);
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("1516741096"), Some(1516741096));
        assert_eq!(parse_timestamp("-3"), Some(-3));
        assert_eq!(parse_timestamp("12abc"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_link_query_conversion() {
        let raw: RawLinkParams = LinkQuery {
            t: Some("2147483647".to_string()),
            u: Some("L3MvbGluaw==".to_string()),
            ip: Some("127.0.0.1".to_string()),
            p: Some("password".to_string()),
        }
        .into();

        assert_eq!(raw.expires, Some(2147483647));
        assert_eq!(raw.url.as_deref(), Some("/s/link"));
        assert_eq!(raw.ip_address.as_deref(), Some("127.0.0.1"));
        assert_eq!(raw.password.as_deref(), Some("password"));
    }

    #[test]
    fn test_link_query_bad_fields_become_absent() {
        let raw: RawLinkParams = LinkQuery {
            t: Some("soon".to_string()),
            u: Some("!!".to_string()),
            ..LinkQuery::default()
        }
        .into();

        assert!(raw.expires.is_none());
        assert!(raw.url.is_none());
        assert!(raw.ip_address.is_none());
    }

    #[test]
    fn test_create_link_request_rejects_wrong_types() {
        let body: CreateLinkRequest = serde_json::from_value(serde_json::json!({
            "expires": "1516741096",
            "url": "/s/link",
            "ip_address": "127.0.0.1",
            "password": 12345,
        }))
        .unwrap();

        let raw: RawLinkParams = body.into();
        assert!(raw.expires.is_none());
        assert_eq!(raw.url.as_deref(), Some("/s/link"));
        assert!(raw.password.is_none());
    }
}
