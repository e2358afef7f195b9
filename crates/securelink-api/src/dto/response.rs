//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A generated secure link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResponse {
    /// Composed URL carrying the digest.
    pub url: String,
}

/// Liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Active digest algorithm.
    pub algorithm: String,
}
