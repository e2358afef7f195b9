//! # securelink-api
//!
//! HTTP API layer for SecureLink built on Axum.
//!
//! Provides the link generation endpoints, health check, middleware
//! (request logging, CORS, compression, timeout), DTOs, and the mapping
//! from domain failures to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
