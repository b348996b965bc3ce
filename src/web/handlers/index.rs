//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

/// Query string accepted by the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub message: Option<String>,
}

/// Template for the landing page.
///
/// Renders `templates/index.html` with the shortening form, usage examples
/// and an optional flash message (escaped by askama).
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub message: Option<String>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// The form posts to `/api/shorturl`; an empty submission redirects back
/// here with `?message=URL%20field%20was%20empty.`.
pub async fn index_handler(Query(query): Query<IndexQuery>) -> impl IntoResponse {
    IndexTemplate {
        message: query.message.filter(|m| !m.is_empty()),
    }
}
