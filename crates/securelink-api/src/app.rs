//! Application builder: wires router, middleware, and state into an Axum app.

use axum::Router;
use tower_http::trace::TraceLayer;

use securelink_core::config::AppConfig;
use securelink_core::error::{AppError, ErrorKind};
use securelink_core::result::AppResult;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::timeout::build_timeout_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    build_router(state)
        .layer(build_timeout_layer(&server))
        .layer(build_compression_layer())
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http())
}

/// Runs the SecureLink server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = config.bind_address();
    tracing::info!(
        algorithm = %config.link.algorithm,
        reject_expired = config.link.reject_expired,
        "Starting SecureLink server..."
    );

    let app = build_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e))?;

    tracing::info!("SecureLink server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("SecureLink server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
