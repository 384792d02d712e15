//! Aggregated result of a batch validation.

use serde::Serialize;

use super::validation::ValidationResult;

/// Results of a batch validation in input order, with summary counts.
///
/// Invariant: `total == valid_count + error_count == results.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub results: Vec<ValidationResult>,
    pub total: usize,
    pub valid_count: usize,
    pub error_count: usize,
}

impl BatchResult {
    /// Builds the summary from per-URL results.
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let total = results.len();
        let valid_count = results.iter().filter(|r| r.valid).count();

        Self {
            results,
            total,
            valid_count,
            error_count: total - valid_count,
        }
    }
}
