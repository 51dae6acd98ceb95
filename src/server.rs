//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api;
use crate::ascii::RenderOptions;
use crate::config::Config;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Defaults applied to every conversion; `width` is overridable per request.
    pub options: RenderOptions,
    /// Largest width a request may ask for.
    pub max_width: u32,
    /// Largest accepted request body in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Create application state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            options: config.render_options(),
            max_width: config.server.max_width,
            max_upload_bytes: config.server.max_upload_bytes,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;
    Router::new()
        .route("/api/ascii/", post(api::handle_ascii))
        .route("/api/ascii", post(api::handle_ascii))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        // The browser front-end is served from a different origin.
        .layer(CorsLayer::permissive())
}

/// Bind `addr` and serve until the process is stopped.
pub async fn run(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await
}
