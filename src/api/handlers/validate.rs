//! Handler for single-URL validation.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::validate::{URL_NOT_PROVIDED, ValidateRequest, ValidateResponse};
use crate::application::services::NOT_ONEDRIVE_MESSAGE;
use crate::domain::Verdict;
use crate::domain::entities::ValidationResult;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::clock::unix_timestamp;

/// Checks whether a OneDrive/SharePoint link is reachable.
///
/// # Endpoint
///
/// `POST /validate`
///
/// # Request Body
///
/// ```json
/// { "url": "https://1drv.ms/x/s!abc" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "valid": false,
///   "url": "https://1drv.ms/x/s!abc",
///   "error": "Page not found (HTTP 404)",
///   "timestamp": 1760745600.123456
/// }
/// ```
///
/// Hosts outside the allow-list get `valid: false` with
/// `"Not a OneDrive/SharePoint link"` and are never contacted. So do
/// non-string `url` values such as `42`; `url` echoes their JSON text.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing, `null` or falsy (`""`, `0`,
/// `false`, `[]`, `{}`).
/// Returns 500 Internal Server Error if the body is not a valid JSON object.
pub async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::from(e).with_verdict())?;
    payload
        .validate()
        .map_err(|e| AppError::from(e).with_verdict())?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request(URL_NOT_PROVIDED).with_verdict())?;

    let result = match url {
        Value::String(url) => state.validation_service.validate(&url).await,
        other => {
            tracing::info!(url = %other, "Rejected non-string URL");
            ValidationResult::new(other.to_string(), Verdict::invalid(NOT_ONEDRIVE_MESSAGE))
        }
    };

    Ok(Json(ValidateResponse::new(result, unix_timestamp())))
}
