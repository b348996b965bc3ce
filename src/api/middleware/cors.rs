//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// CORS policy allowing any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
