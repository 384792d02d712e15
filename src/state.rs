//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ValidationService;
use crate::domain::probe::UrlProber;

/// State shared by all handlers.
///
/// Holds no mutable data; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub validation_service: Arc<ValidationService>,
}

impl AppState {
    pub fn new(validation_service: Arc<ValidationService>) -> Self {
        Self { validation_service }
    }

    /// Builds the state around a prober.
    pub fn with_prober(prober: Arc<dyn UrlProber>) -> Self {
        Self::new(Arc::new(ValidationService::new(prober)))
    }
}
