//! Secure link generation: validation, digest, and URL composition.

pub mod digest;
pub mod request;
pub mod service;
pub mod url;

pub use request::{LinkValidator, RawLinkParams, SecureLinkRequest};
pub use service::{GenerateSecureLinkUseCase, SecureLinkService};
