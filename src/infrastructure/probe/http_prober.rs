//! reqwest-backed reachability probe.

use crate::domain::probe::{ProbeError, UrlProber};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::{Client, redirect};
use std::error::Error as StdError;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Desktop browser User-Agent; some SharePoint tenants reject unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

/// HTTP client settings for [`HttpProber`].
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Upper bound for one probe, connect to first body chunk.
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

/// Probes URLs with a HEAD request, falling back to GET when the server
/// answers HEAD with a client or server error.
///
/// The GET fallback reads at most one body chunk so large shared files are
/// never downloaded. Redirects are followed by the underlying client up to
/// [`ProbeSettings::max_redirects`].
#[derive(Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Builds the prober and its connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if a header value is not valid ASCII or the TLS
    /// backend cannot be initialised.
    pub fn new(settings: &ProbeSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&settings.user_agent).context("Invalid probe User-Agent")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&settings.accept_language)
                .context("Invalid probe Accept-Language")?,
        );
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .redirect(redirect::Policy::limited(settings.max_redirects))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UrlProber for HttpProber {
    async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        let target = parse_target(url)?;

        let head = self
            .client
            .head(target.clone())
            .send()
            .await
            .map_err(classify_error)?;
        let mut status = head.status().as_u16();

        if status >= 400 {
            debug!(url, status, "HEAD rejected, retrying with GET");

            let mut response = self
                .client
                .get(target)
                .send()
                .await
                .map_err(classify_error)?;
            status = response.status().as_u16();

            response.chunk().await.map_err(classify_error)?;
        }

        debug!(url, status, "Probe finished");
        Ok(status)
    }
}

/// Parses a probe target, accepting only absolute http(s) URLs with a host.
fn parse_target(url: &str) -> Result<Url, ProbeError> {
    let parsed = Url::parse(url).map_err(|_| ProbeError::InvalidUrl)?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ProbeError::InvalidUrl);
    }

    Ok(parsed)
}

/// Maps a reqwest failure onto the probe error taxonomy.
fn classify_error(err: reqwest::Error) -> ProbeError {
    // The URL is part of the message and must not influence classification.
    let err = err.without_url();

    if err.is_timeout() {
        ProbeError::Timeout
    } else if err.is_redirect() {
        ProbeError::TooManyRedirects
    } else if err.is_builder() {
        ProbeError::InvalidUrl
    } else if mentions_tls(&err) {
        ProbeError::Tls
    } else if err.is_connect() {
        ProbeError::Connection
    } else {
        ProbeError::Unknown(error_chain(&err))
    }
}

/// reqwest has no TLS error kind; rustls and hyper failures only surface
/// in the source chain messages.
fn mentions_tls(err: &(dyn StdError + 'static)) -> bool {
    let chain = error_chain(err).to_lowercase();
    ["certificate", "tls", "ssl", "handshake"]
        .iter()
        .any(|needle| chain.contains(needle))
}

fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
