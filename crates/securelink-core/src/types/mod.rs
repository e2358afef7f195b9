//! Request and response objects shared by every use case.

pub mod request;
pub mod response;

pub use request::{InvalidRequest, RequestObject, ValidationError};
pub use response::{FailureKind, ResponseFailure};
