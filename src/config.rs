//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PROBE_TIMEOUT_SECONDS` - Per-probe timeout (default: 10, max: 300)
//! - `PROBE_MAX_REDIRECTS` - Redirects followed per probe (default: 30, max: 100)
//! - `PROBE_USER_AGENT` - User-Agent sent with probes (default: desktop Chrome)
//! - `PROBE_ACCEPT_LANGUAGE` - Accept-Language sent with probes
//!
//! There are no required variables.

use anyhow::Result;
use std::env;
use std::time::Duration;

use crate::infrastructure::probe::{DEFAULT_ACCEPT_LANGUAGE, DEFAULT_USER_AGENT, ProbeSettings};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for a single probe, in seconds. Batches have no overall deadline.
    pub probe_timeout_seconds: u64,
    pub probe_max_redirects: usize,
    pub probe_user_agent: String,
    pub probe_accept_language: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let probe_timeout_seconds = env::var("PROBE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let probe_max_redirects = env::var("PROBE_MAX_REDIRECTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let probe_user_agent =
            env::var("PROBE_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let probe_accept_language = env::var("PROBE_ACCEPT_LANGUAGE")
            .unwrap_or_else(|_| DEFAULT_ACCEPT_LANGUAGE.to_string());

        Self {
            listen_addr,
            log_level,
            log_format,
            probe_timeout_seconds,
            probe_max_redirects,
            probe_user_agent,
            probe_accept_language,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `probe_timeout_seconds` is not between 1 and 300
    /// - `probe_max_redirects` is not between 1 and 100
    /// - `probe_user_agent` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.probe_timeout_seconds == 0 || self.probe_timeout_seconds > 300 {
            anyhow::bail!(
                "PROBE_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.probe_timeout_seconds
            );
        }

        if self.probe_max_redirects == 0 || self.probe_max_redirects > 100 {
            anyhow::bail!(
                "PROBE_MAX_REDIRECTS must be between 1 and 100, got {}",
                self.probe_max_redirects
            );
        }

        if self.probe_user_agent.trim().is_empty() {
            anyhow::bail!("PROBE_USER_AGENT must not be empty");
        }

        Ok(())
    }

    /// HTTP client settings for the reachability prober.
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            timeout: Duration::from_secs(self.probe_timeout_seconds),
            max_redirects: self.probe_max_redirects,
            user_agent: self.probe_user_agent.clone(),
            accept_language: self.probe_accept_language.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Probe timeout: {}s", self.probe_timeout_seconds);
        tracing::info!("  Probe max redirects: {}", self.probe_max_redirects);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            probe_timeout_seconds: 10,
            probe_max_redirects: 30,
            probe_user_agent: DEFAULT_USER_AGENT.to_string(),
            probe_accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
