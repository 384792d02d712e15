//! Reachability probe contract.

use async_trait::async_trait;
use thiserror::Error;

/// Transport-level reasons a probe could not produce an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("TLS handshake or certificate verification failed")]
    Tls,

    #[error("connection failed")]
    Connection,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("invalid URL")]
    InvalidUrl,

    #[error("{0}")]
    Unknown(String),
}

/// Issues a lightweight network request against a URL and reports the
/// final HTTP status code.
///
/// Implementations follow redirects and apply their own per-probe timeout.
/// A returned status code says nothing about validity; classification is
/// done by [`crate::domain::verdict::Verdict::from_status`].
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::HttpProber`] - reqwest-backed HEAD/GET probe
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlProber: Send + Sync {
    /// Probes `url` and returns the final status code.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] when no HTTP response could be obtained.
    async fn probe(&self, url: &str) -> Result<u16, ProbeError>;
}
