//! Secure link generation service.

use tracing::{debug, info};

use securelink_core::config::{DigestAlgorithm, LinkConfig};
use securelink_core::result::{AppResult, ResponseResult};
use securelink_core::traits::UseCase;

use super::digest;
use super::request::{LinkValidator, RawLinkParams, SecureLinkRequest};
use super::url::add_query;

/// Name of the query parameter carrying the digest token.
pub const TOKEN_PARAM: &str = "md5";
/// Name of the query parameter carrying the expiry.
pub const EXPIRES_PARAM: &str = "expires";

/// Generates a signed URL from a validated request.
#[derive(Debug, Clone, Copy)]
pub struct GenerateSecureLinkUseCase {
    /// Digest strategy fixed at construction.
    algorithm: DigestAlgorithm,
}

impl GenerateSecureLinkUseCase {
    /// Creates the use case with the given digest strategy.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The configured digest strategy.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

impl UseCase for GenerateSecureLinkUseCase {
    type Request = SecureLinkRequest;
    type Response = String;

    fn process_request(&self, request: SecureLinkRequest) -> AppResult<String> {
        let token = digest::compute(self.algorithm, &request)?;
        debug!(algorithm = %self.algorithm, token = %token, "Computed link digest");

        let link = match self.algorithm {
            DigestAlgorithm::HashString => {
                let expires = request.expires().to_string();
                add_query(request.url(), &[(TOKEN_PARAM, token), (EXPIRES_PARAM, expires)])?
            }
            DigestAlgorithm::HashHex => add_query(request.url(), &[(TOKEN_PARAM, token)])?,
        };

        info!(
            algorithm = %self.algorithm,
            expires = request.expires(),
            ip_address = %request.ip_address(),
            "Secure link generated"
        );

        Ok(link)
    }
}

/// Validates raw input and runs [`GenerateSecureLinkUseCase`].
#[derive(Debug, Clone)]
pub struct SecureLinkService {
    /// Input validator.
    validator: LinkValidator,
    /// Generation use case.
    use_case: GenerateSecureLinkUseCase,
}

impl SecureLinkService {
    /// Creates a new secure link service.
    pub fn new(config: &LinkConfig) -> Self {
        Self {
            validator: LinkValidator::new(config),
            use_case: GenerateSecureLinkUseCase::new(config.algorithm),
        }
    }

    /// Validates `raw` and returns the signed URL.
    pub fn generate(&self, raw: RawLinkParams) -> ResponseResult<String> {
        self.use_case.execute(self.validator.validate(raw))
    }

    /// Like [`generate`](Self::generate), with an explicit reference time.
    pub fn generate_at(&self, raw: RawLinkParams, now: i64) -> ResponseResult<String> {
        self.use_case.execute(self.validator.validate_at(raw, now))
    }

    /// The configured digest strategy.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.use_case.algorithm()
    }
}
