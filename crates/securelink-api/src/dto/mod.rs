//! Data transfer objects for API requests and responses.

pub mod request;
pub mod response;

pub use request::{CreateLinkRequest, LinkQuery};
pub use response::{ApiResponse, HealthResponse, LinkResponse};
