//! DTOs for the single-URL validation endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::entities::ValidationResult;

pub const URL_NOT_PROVIDED: &str = "URL not provided";

/// Request to validate one URL.
///
/// Only JSON objects are accepted. `url` is kept as raw JSON: falsy values
/// (`null`, `""`, `0`, `false`, `[]`, `{}`) count as not provided, other
/// non-string values are answered as links outside the allow-list.
#[derive(Debug, Deserialize, Validate)]
#[serde(from = "Map<String, Value>")]
pub struct ValidateRequest {
    #[validate(
        required(message = "URL not provided"),
        custom(function = "validate_url_provided")
    )]
    pub url: Option<Value>,
}

impl From<Map<String, Value>> for ValidateRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            url: body.remove("url"),
        }
    }
}

fn validate_url_provided(url: &Value) -> Result<(), ValidationError> {
    if is_truthy(url) {
        Ok(())
    } else {
        Err(ValidationError::new("url_not_provided").with_message(Cow::Borrowed(URL_NOT_PROVIDED)))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Verdict for a single URL.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub url: String,
    pub error: Option<String>,
    /// Seconds since the Unix epoch when the check finished.
    pub timestamp: f64,
}

impl ValidateResponse {
    pub fn new(result: ValidationResult, timestamp: f64) -> Self {
        Self {
            valid: result.valid,
            url: result.url,
            error: result.error,
            timestamp,
        }
    }
}
