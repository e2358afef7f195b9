//! Maps domain failures to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use securelink_core::error::{AppError, ErrorKind};
use securelink_core::types::{FailureKind, ResponseFailure};

/// A failure leaving the API, rendered as `{"type", "message"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub ResponseFailure);

impl ApiError {
    /// The wrapped failure.
    pub fn failure(&self) -> &ResponseFailure {
        &self.0
    }

    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind)
    }
}

/// HTTP status for a failure classification.
pub fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::ParametersError => StatusCode::BAD_REQUEST,
        FailureKind::ResourceError => StatusCode::NOT_FOUND,
        FailureKind::SystemError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ResponseFailure> for ApiError {
    fn from(failure: ResponseFailure) -> Self {
        Self(failure)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let failure = match err.kind {
            ErrorKind::Validation => ResponseFailure::parameters_error(err.message.clone()),
            ErrorKind::NotFound => ResponseFailure::resource_error(err.message.clone()),
            _ => ResponseFailure::from_error(&err),
        };
        Self(failure)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(message = %self.0.message, "Request failed with system error");
        }

        (status, Json(self.0.value())).into_response()
    }
}
