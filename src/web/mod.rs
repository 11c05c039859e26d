//! Browser front-end: the translation form and a small JSON API.

mod handlers;
pub mod page;
pub mod session;
mod state;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/api/translate", post(handlers::api_translate))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn serve(config: AppConfig) -> Result<()> {
    let addr = config.listen;
    info!(
        endpoint = %config.endpoint.base_url,
        model = %config.endpoint.model,
        "using completion endpoint"
    );

    let app = router(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Starting server on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
