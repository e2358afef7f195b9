//! Convenience result type aliases for SecureLink.

use crate::error::AppError;
use crate::types::response::ResponseFailure;

/// A specialized `Result` type for SecureLink operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;

/// Outcome of a use case execution: the success value, or a classified
/// failure ready to be reported at the transport boundary.
pub type ResponseResult<T> = Result<T, ResponseFailure>;
