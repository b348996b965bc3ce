//! Handler for the short URL creation endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use crate::api::dto::short_url::{ShortUrlForm, ShortUrlResponse};
use crate::error::{AppError, ErrorBody, SHORTEN_FAILED_MESSAGE};
use crate::state::AppState;

/// Message shown on the landing page when the form was submitted empty.
pub const EMPTY_URL_MESSAGE: &str = "URL field was empty.";

/// Creates (or returns the existing) short URL for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl` with an urlencoded `url` field.
///
/// # Response
///
/// - Missing or empty `url` (or an undecodable body): `302 Found` to
///   `/?message=URL%20field%20was%20empty.`
/// - Success: `200 OK`
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Any failure, validation or internal, yields `400 Bad Request` with
/// `{"error": "Invalid URL or internal server error"}`. The cause is only
/// logged.
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortUrlForm>, FormRejection>,
) -> Response {
    let url = match form {
        Ok(Form(form)) => form.into_url(),
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable shorten form");
            None
        }
    };

    let Some(url) = url else {
        return empty_url_redirect();
    };

    match state.shorten_service.shorten(&url).await {
        Ok(record) => Json(ShortUrlResponse::from(record)).into_response(),
        Err(e) => {
            match &e {
                AppError::InvalidUrlFormat | AppError::DnsLookupFailed { .. } => {
                    warn!(error = %e, url = %url, "Rejected URL")
                }
                _ => error!(error = %e, url = %url, "Failed to shorten URL"),
            }

            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: SHORTEN_FAILED_MESSAGE,
                }),
            )
                .into_response()
        }
    }
}

/// Redirect back to the landing page carrying the empty-field warning.
fn empty_url_redirect() -> Response {
    let location = format!("/?message={}", urlencoding::encode(EMPTY_URL_MESSAGE));
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
