//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The validator is called directly from browser pages that scan QR codes,
/// hosted on arbitrary origins.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
