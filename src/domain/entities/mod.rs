//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted short code to original URL mapping
//! - [`NewUrlRecord`] - Input for inserting a record
//!
//! The sequence counter has no entity of its own: it is a single integer per
//! namespace, owned by [`crate::domain::repositories::SequenceRepository`].

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
