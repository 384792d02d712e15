//! Business logic services for the application layer.

pub mod validation_service;

pub use validation_service::{NOT_ONEDRIVE_MESSAGE, ValidationService};
