//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod home;
pub mod validate;
pub mod validate_batch;

pub use health::health_handler;
pub use home::home_handler;
pub use validate::validate_handler;
pub use validate_batch::validate_batch_handler;
