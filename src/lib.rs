//! # QR Link Validator
//!
//! A small HTTP service that checks whether OneDrive/SharePoint links are
//! reachable before they are shown to end users, typically after being
//! decoded from a QR code.
//!
//! ## Architecture
//!
//! This crate follows the same layer separation as a Clean Architecture service:
//!
//! - **Domain Layer** ([`domain`]) - Host allow-list, probe contract and verdict rules
//! - **Application Layer** ([`application`]) - Single and batch validation
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest-backed HEAD/GET prober
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `GET /` and `GET /health` - Service information and liveness
//! - `POST /validate` - One URL, screened by the OneDrive/SharePoint allow-list
//! - `POST /validate-batch` - Many URLs, probed sequentially without screening
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:5000"   # Optional
//! cargo run
//!
//! curl -X POST localhost:5000/validate \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "https://1drv.ms/x/s!abc"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ValidationService;
    pub use crate::domain::entities::{BatchResult, ValidationResult};
    pub use crate::domain::{ProbeError, UrlProber, Verdict};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
