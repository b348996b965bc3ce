//! Handler for short URL resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{shorturl}`
///
/// # Response
///
/// - Known code: `302 Found` with `Location` set to the original URL
/// - Unknown or non-numeric code: `200 OK` with
///   `{"error": "No short URL found for the given input"}`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store is unavailable.
pub async fn redirect_handler(
    Path(shorturl): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.shorten_service.resolve(&shorturl).await?;

    debug!(shorturl = %shorturl, original_url = %original_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
