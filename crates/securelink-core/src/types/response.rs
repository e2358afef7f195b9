//! Failure responses produced by use cases.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;
use crate::types::request::InvalidRequest;

/// Classification of a use case failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    /// One or more input parameters were absent or invalid.
    ParametersError,
    /// The addressed resource does not exist.
    ResourceError,
    /// An unexpected internal failure.
    SystemError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParametersError => write!(f, "PARAMETERS_ERROR"),
            Self::ResourceError => write!(f, "RESOURCE_ERROR"),
            Self::SystemError => write!(f, "SYSTEM_ERROR"),
        }
    }
}

/// A classified failure carried from a use case to the transport boundary.
///
/// Serializes as `{"type": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct ResponseFailure {
    /// Failure classification.
    #[serde(rename = "type")]
    pub kind: FailureKind,
    /// Human-readable message.
    pub message: String,
}

impl ResponseFailure {
    /// Creates a failure of the given kind.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a parameters failure.
    pub fn parameters_error(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ParametersError, message)
    }

    /// Creates a resource failure.
    pub fn resource_error(message: impl Into<String>) -> Self {
        Self::new(FailureKind::ResourceError, message)
    }

    /// Creates a system failure.
    pub fn system_error(message: impl Into<String>) -> Self {
        Self::new(FailureKind::SystemError, message)
    }

    /// Builds a parameters failure listing every validation error as
    /// `parameter: message`, one per line, in validation order.
    pub fn from_invalid_request(request: &InvalidRequest) -> Self {
        let message = request
            .errors()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        Self::parameters_error(message)
    }

    /// Builds a system failure from an application error, keeping its kind
    /// and message.
    pub fn from_error(err: &AppError) -> Self {
        Self::system_error(err.to_string())
    }

    /// Structured `{type, message}` value used as the error body.
    pub fn value(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.kind,
            "message": self.message,
        })
    }
}
