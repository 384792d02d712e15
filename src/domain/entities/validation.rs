//! Per-URL validation result.

use serde::Serialize;

use crate::domain::verdict::Verdict;

/// Result of validating a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub url: String,
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    /// Creates a result from the checked URL and its verdict.
    pub fn new(url: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            url: url.into(),
            valid: verdict.valid,
            error: verdict.reason,
        }
    }
}
