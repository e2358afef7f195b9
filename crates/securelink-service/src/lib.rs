//! # securelink-service
//!
//! Business logic for SecureLink. The secure link pipeline validates raw
//! input, derives an MD5-based digest, and composes the final URL.
//!
//! Every operation is a pure, synchronous computation; services hold only
//! read-only configuration and are safe to share across tasks.

pub mod link;

pub use link::{
    GenerateSecureLinkUseCase, LinkValidator, RawLinkParams, SecureLinkRequest, SecureLinkService,
};
