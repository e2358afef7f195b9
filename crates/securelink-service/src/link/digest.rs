//! Secure link digests.
//!
//! Both strategies hash `expires + url + ip_address + "=" + password` with
//! MD5; they differ in which URL is hashed and how the digest is encoded.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use securelink_core::config::DigestAlgorithm;
use securelink_core::result::AppResult;

use super::request::SecureLinkRequest;
use super::url::strip_query;

/// Computes the digest for `request` with the selected strategy.
pub fn compute(algorithm: DigestAlgorithm, request: &SecureLinkRequest) -> AppResult<String> {
    match algorithm {
        DigestAlgorithm::HashString => Ok(hash_string(
            request.expires(),
            request.url(),
            request.ip_address(),
            request.password(),
        )),
        DigestAlgorithm::HashHex => hash_hex(
            request.expires(),
            request.url(),
            request.ip_address(),
            request.password(),
        ),
    }
}

/// MD5 over the full URL, encoded as unpadded URL-safe base64 (22 chars).
pub fn hash_string(expires: u64, url: &str, ip_address: &str, password: &str) -> String {
    let digest = md5::compute(signing_input(expires, url, ip_address, password));
    URL_SAFE_NO_PAD.encode(digest.0)
}

/// MD5 over the URL with its query removed, as 32 lowercase hex chars.
pub fn hash_hex(expires: u64, url: &str, ip_address: &str, password: &str) -> AppResult<String> {
    let url = strip_query(url)?;
    let digest = md5::compute(signing_input(expires, &url, ip_address, password));
    Ok(format!("{digest:x}"))
}

fn signing_input(expires: u64, url: &str, ip_address: &str, password: &str) -> String {
    format!("{expires}{url}{ip_address}={password}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_string_known_value() {
        let token = hash_string(2147483647, "/s/link", "127.0.0.1", "password");
        assert_eq!(token, "FbRZ_kL2P7SJMI6hCxS11Q");
    }

    #[test]
    fn test_hash_hex_known_value() {
        let token = hash_hex(
            1516741096,
            "http://stackoverflow.com/search?q=question",
            "127.0.0.1",
            "password",
        )
        .unwrap();
        assert_eq!(token, "560e6b3ade697e2fd86b657ad3ade7de");
    }

    #[test]
    fn test_hash_hex_ignores_query() {
        let with_query = hash_hex(10, "http://a.b/c?x=1", "1.2.3.4", "s").unwrap();
        let without = hash_hex(10, "http://a.b/c", "1.2.3.4", "s").unwrap();
        assert_eq!(with_query, without);
    }

    #[test]
    fn test_hash_string_covers_query() {
        let with_query = hash_string(10, "http://a.b/c?x=1", "1.2.3.4", "s");
        let without = hash_string(10, "http://a.b/c", "1.2.3.4", "s");
        assert_ne!(with_query, without);
    }

    #[test]
    fn test_tokens_are_url_safe_and_sized() {
        for password in ["a", "b", "c", "password", "секрет"] {
            let token = hash_string(1, "/x", "10.0.0.1", password);
            assert!(token.len() <= 22);
            assert!(!token.contains(['+', '/', '=']));

            let hex = hash_hex(1, "/x", "10.0.0.1", password).unwrap();
            assert_eq!(hex.len(), 32);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_password_not_in_output() {
        let token = hash_string(1, "/x", "10.0.0.1", "supersecret");
        assert!(!token.contains("supersecret"));
    }

    #[test]
    fn test_signing_input_layout() {
        assert_eq!(
            signing_input(0, "/p", "0.0.0.0", "pw"),
            "0/p0.0.0.0=pw"
        );
    }
}
