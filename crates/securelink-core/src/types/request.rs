//! Validated request objects.
//!
//! A request object is built from raw transport input in a single
//! validation pass and is either fully valid or carries every error found.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the offending parameter.
    pub parameter: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.parameter, self.message)
    }
}

/// Ordered collection of validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRequest {
    errors: Vec<ValidationError>,
}

impl InvalidRequest {
    /// Creates an empty error collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error, preserving insertion order.
    pub fn add_error(&mut self, parameter: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError {
            parameter: parameter.into(),
            message: message.into(),
        });
    }

    /// Whether any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Recorded errors in insertion order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Outcome of validating raw input into a typed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestObject<T> {
    /// Every field passed validation.
    Valid(T),
    /// At least one field failed; no typed fields are available.
    Invalid(InvalidRequest),
}

impl<T> RequestObject<T> {
    /// Whether the request passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the validated value, if any.
    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the validation errors, if any.
    pub fn invalid(self) -> Option<InvalidRequest> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(invalid) => Some(invalid),
        }
    }
}
