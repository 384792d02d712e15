use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
    error: String,
}

/// Errors returned by HTTP handlers.
///
/// A link that fails validation is *not* an error; it is a normal `200`
/// response with `valid: false`. This type only covers bad input and
/// unexpected failures.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String, verdict: bool },
    Internal { message: String, verdict: bool },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            verdict: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: format!("Internal error: {}", message.into()),
            verdict: false,
        }
    }

    /// Adds `"valid": false` to the response body, as single-URL clients
    /// expect a verdict even on failure.
    pub fn with_verdict(self) -> Self {
        match self {
            Self::BadRequest { message, .. } => Self::BadRequest {
                message,
                verdict: true,
            },
            Self::Internal { message, .. } => Self::Internal {
                message,
                verdict: true,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, verdict) = match self {
            AppError::BadRequest { message, verdict } => {
                (StatusCode::BAD_REQUEST, message, verdict)
            }
            AppError::Internal { message, verdict } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, verdict)
            }
        };

        let body = ErrorBody {
            valid: verdict.then_some(false),
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

/// Malformed or mistyped bodies are answered with `500 Internal Server Error`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        AppError::internal(rejection.body_text())
    }
}

/// Field validation failures become `400 Bad Request` with the first
/// field message.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}
