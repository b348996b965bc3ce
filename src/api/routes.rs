//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`              - Greeting
/// - `POST /shorturl`           - Create a short URL from a form field
/// - `GET  /shorturl/{shorturl}` - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{shorturl}", get(redirect_handler))
}
