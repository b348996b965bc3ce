//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Landing page
//! - `GET  /health`                  - Health check
//! - `GET  /api/hello`               - Greeting
//! - `POST /api/shorturl`            - Create a short URL
//! - `GET  /api/shorturl/{shorturl}` - Redirect to the original URL
//! - `/public/*`                     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::cors::cors_layer;
use crate::api::middleware::tracing::trace_layer;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the router with all routes and middleware, without path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory served under `/public`
pub fn router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/public", ServeDir::new(public_dir))
        .with_state(state)
        .layer(cors_layer())
        .layer(trace_layer())
}

/// Constructs the application router with trailing slashes trimmed before
/// routing.
pub fn app_router(state: AppState, public_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, public_dir))
}
