//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;
use crate::utils::clock::unix_timestamp;

/// Reports that the service is alive.
///
/// The service has no backing stores, so there are no component checks; a
/// response at all means the process is serving requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "healthy", "timestamp": 1760745600.123456 }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: unix_timestamp(),
    })
}
