//! Core domain entities produced by URL validation.
//!
//! Entities are plain data structures that live for a single request and are
//! serialized straight into API responses.
//!
//! # Entity Types
//!
//! - [`ValidationResult`] - Verdict for one URL
//! - [`BatchResult`] - Ordered results of a batch with summary counts

pub mod batch;
pub mod validation;

pub use batch::BatchResult;
pub use validation::ValidationResult;
