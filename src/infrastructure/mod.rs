//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`probe`] - reqwest implementation of [`crate::domain::UrlProber`]

pub mod probe;
