//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenService;

/// State shared across request handlers.
///
/// Holds no mutable data of its own; all shared state lives in the store
/// behind the service.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
}

impl AppState {
    pub fn new(shorten_service: Arc<ShortenService>) -> Self {
        Self { shorten_service }
    }
}
