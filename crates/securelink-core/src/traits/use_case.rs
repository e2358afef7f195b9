//! Use case trait.

use crate::result::{AppResult, ResponseResult};
use crate::types::request::RequestObject;
use crate::types::response::ResponseFailure;

/// A single application operation driven by a validated request object.
///
/// Implementors supply [`process_request`](UseCase::process_request);
/// [`execute`](UseCase::execute) turns invalid requests into parameters
/// failures and any error raised while processing into a system failure.
pub trait UseCase: Send + Sync {
    /// Validated input.
    type Request;
    /// Success value.
    type Response;

    /// Runs the operation on a request that already passed validation.
    fn process_request(&self, request: Self::Request) -> AppResult<Self::Response>;

    /// Runs the operation, classifying every failure.
    fn execute(&self, request: RequestObject<Self::Request>) -> ResponseResult<Self::Response> {
        match request {
            RequestObject::Invalid(invalid) => {
                tracing::debug!(errors = invalid.errors().len(), "Rejecting invalid request");
                Err(ResponseFailure::from_invalid_request(&invalid))
            }
            RequestObject::Valid(request) => self.process_request(request).map_err(|err| {
                tracing::error!(error = %err, "Use case failed while processing request");
                ResponseFailure::from_error(&err)
            }),
        }
    }
}
