//! Application layer services implementing business logic.
//!
//! Services combine the domain rules with a [`crate::domain::UrlProber`] and
//! expose a small API for HTTP handlers and the `check` binary.
//!
//! # Available Services
//!
//! - [`services::validation_service::ValidationService`] - Single and batch link validation

pub mod services;
