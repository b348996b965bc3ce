//! Business logic services for the application layer.

pub mod shorten_service;
pub mod url_validator;

pub use shorten_service::ShortenService;
pub use url_validator::{UrlValidator, matches_url_shape};
