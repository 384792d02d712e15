#![allow(dead_code)]

use async_trait::async_trait;
use qr_link_validator::domain::{ProbeError, UrlProber};
use qr_link_validator::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Prober that answers from a fixed table and records every URL it is asked about.
pub struct StubProber {
    outcomes: HashMap<String, Result<u16, ProbeError>>,
    fallback: Result<u16, ProbeError>,
    calls: Mutex<Vec<String>>,
}

impl StubProber {
    /// Every URL answers with `status`.
    pub fn always(status: u16) -> Self {
        Self::with_fallback(Ok(status))
    }

    pub fn with_fallback(fallback: Result<u16, ProbeError>) -> Self {
        Self {
            outcomes: HashMap::new(),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, url: &str, outcome: Result<u16, ProbeError>) -> Self {
        self.outcomes.insert(url.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlProber for StubProber {
    async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.outcomes
            .get(url)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

pub fn create_test_state(prober: Arc<StubProber>) -> AppState {
    AppState::with_prober(prober)
}
