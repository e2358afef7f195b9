//! Route definitions for the SecureLink HTTP API.
//!
//! The query-string generator is served at `/`; JSON endpoints are
//! mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the logging middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(link_routes())
        .merge(health_routes());

    Router::new()
        .route("/", get(handlers::link::generate_from_query))
        .nest("/api", api_routes)
        .fallback(handlers::link::not_found)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Link generation endpoints
fn link_routes() -> Router<AppState> {
    Router::new().route("/links", post(handlers::link::create_link))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
