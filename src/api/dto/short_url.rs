//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;

/// Form submitted to `POST /api/shorturl`.
///
/// `url` is optional so a missing field decodes instead of being rejected;
/// the handler treats missing and empty alike.
#[derive(Debug, Default, Deserialize)]
pub struct ShortUrlForm {
    #[serde(default)]
    pub url: Option<String>,
}

impl ShortUrlForm {
    /// The submitted URL, or `None` if it was missing or empty.
    pub fn into_url(self) -> Option<String> {
        self.url.filter(|url| !url.is_empty())
    }
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlRecord> for ShortUrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_url,
        }
    }
}
