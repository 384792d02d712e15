//! DTOs for the service information and health endpoints.

use serde::Serialize;

/// Service information returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Liveness response returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: f64,
}
