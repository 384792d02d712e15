//! Classification of probe outcomes into a reachability verdict.

use super::probe::ProbeError;

/// Outcome of a reachability check: whether the link can be shown to a user
/// and, if not, why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub reason: Option<String>,
}

impl Verdict {
    /// A reachable link.
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// An unreachable or rejected link with a human-readable reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    /// Classifies the final HTTP status code of a probe.
    ///
    /// | Status                              | Verdict                  |
    /// |-------------------------------------|--------------------------|
    /// | 200, 201, 202, 203, 204, 206, 304   | valid                    |
    /// | 301, 302, 303, 307, 308             | valid                    |
    /// | 401, 403                            | access denied            |
    /// | 404                                 | not found                |
    /// | 410                                 | permanently removed      |
    /// | 500 and above                       | server error             |
    /// | anything else                       | unknown status           |
    ///
    /// Redirect codes only reach this point when the client stopped following
    /// them; they are still reported as valid.
    pub fn from_status(status: u16) -> Self {
        match status {
            200 | 201 | 202 | 203 | 204 | 206 | 304 => Self::valid(),
            301 | 302 | 303 | 307 | 308 => Self::valid(),
            401 | 403 => Self::invalid(format!("Access denied (HTTP {})", status)),
            404 => Self::invalid("Page not found (HTTP 404)"),
            410 => Self::invalid("Content permanently removed (HTTP 410)"),
            s if s >= 500 => Self::invalid(format!("Server error (HTTP {})", s)),
            s => Self::invalid(format!("Unknown HTTP status: {}", s)),
        }
    }
}

impl From<ProbeError> for Verdict {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::Timeout => Self::invalid("Response timed out (timeout)"),
            ProbeError::Tls => Self::invalid("SSL certificate error"),
            ProbeError::Connection => Self::invalid("Connection error - URL unreachable"),
            ProbeError::TooManyRedirects => Self::invalid("Too many redirects"),
            ProbeError::InvalidUrl => Self::invalid("Invalid URL"),
            ProbeError::Unknown(detail) => Self::invalid(format!("Unknown error: {}", detail)),
        }
    }
}

impl From<Result<u16, ProbeError>> for Verdict {
    fn from(outcome: Result<u16, ProbeError>) -> Self {
        match outcome {
            Ok(status) => Self::from_status(status),
            Err(err) => err.into(),
        }
    }
}
