//! URL record entity: an original URL and the short code assigned to it.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short code to an original URL.
///
/// Records are created once by [`crate::application::services::ShortenService`]
/// and never mutated afterwards. `short_url` is unique across all records.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_url: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, original_url: String, short_url: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            short_url,
            created_at,
        }
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_url: i64,
}
