//! Application error type and its HTTP rendering.
//!
//! Every failure in the shortening pipeline is an [`AppError`]. Handlers turn
//! it into one of a few fixed JSON envelopes of the form `{"error": "..."}`;
//! the detailed cause only ever reaches the server log.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for any failed `POST /api/shorturl`.
pub const SHORTEN_FAILED_MESSAGE: &str = "Invalid URL or internal server error";

/// Message returned when a short code resolves to nothing.
pub const NOT_FOUND_MESSAGE: &str = "No short URL found for the given input";

/// Message returned for store failures outside the shortening endpoint.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// JSON error envelope shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The candidate failed the URL shape pattern or could not be parsed.
    #[error("Invalid URL format")]
    InvalidUrlFormat,

    /// The candidate's hostname did not resolve.
    #[error("DNS lookup failed for host '{host}'")]
    DnsLookupFailed {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// An insert collided with an existing unique key.
    #[error("Unique constraint violation ({})", .constraint.as_deref().unwrap_or("unknown"))]
    DuplicateKey { constraint: Option<String> },

    /// Connection or transport failure talking to the backing store.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    /// No record exists for the requested short code.
    #[error("No record for short code '{code}'")]
    NotFound { code: String },
}

impl AppError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn dns_lookup_failed(host: impl Into<String>, source: std::io::Error) -> Self {
        Self::DnsLookupFailed {
            host: host.into(),
            source,
        }
    }

    /// Status code and client-facing message for this error.
    ///
    /// A resolution miss is reported with `200 OK`, not `404`.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidUrlFormat | AppError::DnsLookupFailed { .. } => {
                (StatusCode::BAD_REQUEST, SHORTEN_FAILED_MESSAGE)
            }
            AppError::NotFound { .. } => (StatusCode::OK, NOT_FOUND_MESSAGE),
            AppError::DuplicateKey { .. } | AppError::StoreUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::DuplicateKey {
                constraint: db.constraint().map(str::to_owned),
            };
        }

        AppError::StoreUnavailable(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
