//! Handler for batch validation.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::validate_batch::{INVALID_URL_LIST, ValidateBatchRequest};
use crate::domain::entities::BatchResult;
use crate::error::AppError;
use crate::state::AppState;

/// Checks several URLs in one request.
///
/// # Endpoint
///
/// `POST /validate-batch`
///
/// # Batch Processing
///
/// URLs are probed one after another in input order. A failing URL only
/// marks its own result invalid. The OneDrive/SharePoint allow-list is not
/// applied here.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     "https://1drv.ms/a",
///     { "url": "https://contoso.sharepoint.com/b" }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "results": [
///     { "url": "https://1drv.ms/a", "valid": true, "error": null },
///     { "url": "https://contoso.sharepoint.com/b", "valid": false, "error": "Access denied (HTTP 403)" }
///   ],
///   "total": 2,
///   "valid_count": 1,
///   "error_count": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `urls` is missing, empty or not an array.
/// Returns 500 Internal Server Error if the body is not a valid JSON object.
pub async fn validate_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateBatchRequest>, JsonRejection>,
) -> Result<Json<BatchResult>, AppError> {
    let Json(payload) = payload?;

    let urls = payload
        .into_urls()
        .ok_or_else(|| AppError::bad_request(INVALID_URL_LIST))?;

    let batch = state.validation_service.validate_batch(urls).await;

    Ok(Json(batch))
}
