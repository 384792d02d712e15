//! Handler for the service information endpoint.

use axum::Json;

use crate::api::dto::health::HomeResponse;

pub const SERVICE_MESSAGE: &str = "QR code validation API - OneDrive/SharePoint";

/// Describes the running service.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {
///   "status": "online",
///   "message": "QR code validation API - OneDrive/SharePoint",
///   "version": "1.0.0"
/// }
/// ```
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        status: "online".to_string(),
        message: SERVICE_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
