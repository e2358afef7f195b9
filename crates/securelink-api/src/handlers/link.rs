//! Secure link generation handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{Uri, header};
use axum::response::IntoResponse;

use securelink_core::types::ResponseFailure;
use securelink_service::RawLinkParams;

use crate::dto::request::{CreateLinkRequest, LinkQuery};
use crate::dto::response::{ApiResponse, LinkResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /?t=&u=&ip=&p=
///
/// Returns the composed URL as plain text.
pub async fn generate_from_query(
    State(state): State<AppState>,
    query: Result<Query<LinkQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ResponseFailure::parameters_error(format!("query: {}", rejection.body_text()))
    })?;

    let link = state.link_service.generate(RawLinkParams::from(query))?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], link))
}

/// POST /api/links
pub async fn create_link(
    State(state): State<AppState>,
    body: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<LinkResponse>>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        ResponseFailure::parameters_error(format!("body: {}", rejection.body_text()))
    })?;

    let url = state.link_service.generate(RawLinkParams::from(body))?;

    Ok(Json(ApiResponse::ok(LinkResponse { url })))
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ResponseFailure::resource_error(format!("No route for {}", uri.path())).into()
}
