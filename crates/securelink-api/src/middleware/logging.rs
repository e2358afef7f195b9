//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Header carrying the per-request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs request method, path, status, and duration.
///
/// Reuses an incoming `x-request-id` or assigns a fresh one, and echoes
/// it on the response. The query string is not logged since it may carry
/// the link password.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let start = Instant::now();

    let span = info_span!("request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = %duration.as_millis(),
        "HTTP request"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
