//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for form decoding and JSON serialization.

pub mod health;
pub mod hello;
pub mod short_url;
