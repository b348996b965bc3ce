//! URL validation: shape pattern, WHATWG parse, then DNS resolution.

use regex::{Regex, RegexBuilder};
use std::net::SocketAddr;
use std::sync::{Arc, LazyLock};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::infrastructure::dns::HostResolver;

/// Case-insensitive, ASCII-only URL shape pattern.
///
/// Optional `http(s)://`, then either a dotted DNS name whose last label is
/// alphabetic (two or more letters) or a dotted quad of 1-3 digit groups,
/// then optional port, path segments, query string and fragment. Dotted
/// quads are not range-checked.
///
/// Unicode mode is off: `\d` is `[0-9]` only and case folding never maps
/// non-ASCII letters such as the Kelvin sign (U+212A) onto `[a-z]`.
static URL_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(concat!(
        r"^(https?://)?",
        r"((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|",
        r"((\d{1,3}\.){3}\d{1,3}))",
        r"(:\d+)?(/[-a-z\d%_.~+]*)*",
        r"(\?[;&a-z\d%_.~+=-]*)?",
        r"(#[-a-z\d_]*)?$",
    ))
    .case_insensitive(true)
    .unicode(false)
    .build()
    .expect("URL shape pattern is valid")
});

/// Returns true if `candidate` matches the URL shape pattern.
pub fn matches_url_shape(candidate: &str) -> bool {
    URL_SHAPE_REGEX.is_match(candidate)
}

/// Validates candidate URLs before they are shortened.
///
/// A URL is accepted only if it matches the shape pattern, parses as an
/// absolute URL with a host, and that host resolves. The resolution result is
/// returned but otherwise unused; reachability is the point of the check.
#[derive(Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    /// Creates a validator that resolves hostnames with `resolver`.
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Validates `candidate` and returns the addresses its host resolved to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrlFormat`] if the shape pattern or URL
    /// parsing fails. No DNS lookup happens in that case.
    ///
    /// Returns [`AppError::DnsLookupFailed`] if the hostname does not resolve.
    pub async fn validate(&self, candidate: &str) -> Result<Vec<SocketAddr>, AppError> {
        if !matches_url_shape(candidate) {
            debug!(candidate, "URL does not match shape pattern");
            return Err(AppError::InvalidUrlFormat);
        }

        let host = extract_host(candidate)?;

        self.resolver
            .lookup(&host)
            .await
            .map_err(|e| AppError::dns_lookup_failed(host, e))
    }
}

/// Parses `candidate` as an absolute URL and returns its hostname.
///
/// Scheme-less input (`example.com`) is rejected here even though it passes
/// the shape pattern, as is any URL without a host.
fn extract_host(candidate: &str) -> Result<String, AppError> {
    let url = Url::parse(candidate).map_err(|e| {
        debug!(candidate, error = %e, "URL failed to parse");
        AppError::InvalidUrlFormat
    })?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(AppError::InvalidUrlFormat),
    }
}
