//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short URL creation and resolution
//! - [`services::url_validator::UrlValidator`] - Shape, parse and DNS validation

pub mod services;
