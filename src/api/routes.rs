//! API route configuration.
//!
//! All endpoints are public; there is no authentication layer.

use crate::api::handlers::{
    health_handler, home_handler, validate_batch_handler, validate_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /`               - Service name and version
/// - `GET  /health`         - Liveness with current timestamp
/// - `POST /validate`       - Validate one OneDrive/SharePoint URL
/// - `POST /validate-batch` - Validate a list of URLs sequentially
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/validate", post(validate_handler))
        .route("/validate-batch", post(validate_batch_handler))
}
