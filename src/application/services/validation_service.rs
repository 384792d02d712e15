//! Link validation service.

use crate::domain::allow_list::is_onedrive_url;
use crate::domain::entities::{BatchResult, ValidationResult};
use crate::domain::probe::UrlProber;
use crate::domain::verdict::Verdict;
use std::sync::Arc;
use tracing::{debug, info};

/// Reason reported for URLs outside the OneDrive/SharePoint allow-list.
pub const NOT_ONEDRIVE_MESSAGE: &str = "Not a OneDrive/SharePoint link";

/// Service that decides whether links can be shown to end users.
///
/// Combines the host allow-list with a network probe:
/// - single URLs are screened by the allow-list before any probe is issued
/// - batches are probed one after another, in input order, without screening
///
/// No method of this service fails; every network problem ends up as a
/// `valid: false` result with a reason.
pub struct ValidationService {
    prober: Arc<dyn UrlProber>,
}

impl ValidationService {
    /// Creates a new validation service.
    pub fn new(prober: Arc<dyn UrlProber>) -> Self {
        Self { prober }
    }

    /// Probes `url` and classifies the outcome.
    pub async fn check_url_accessibility(&self, url: &str) -> Verdict {
        let verdict = Verdict::from(self.prober.probe(url).await);

        match &verdict.reason {
            None => debug!(url, "URL reachable"),
            Some(reason) => info!(url, reason = %reason, "URL rejected"),
        }

        verdict
    }

    /// Validates a single URL.
    ///
    /// URLs outside the allow-list are rejected with [`NOT_ONEDRIVE_MESSAGE`]
    /// and never probed.
    pub async fn validate(&self, url: &str) -> ValidationResult {
        if !is_onedrive_url(url) {
            info!(url, "Rejected non OneDrive/SharePoint URL");
            return ValidationResult::new(url, Verdict::invalid(NOT_ONEDRIVE_MESSAGE));
        }

        let verdict = self.check_url_accessibility(url).await;
        ValidationResult::new(url, verdict)
    }

    /// Probes every URL sequentially and aggregates the results.
    ///
    /// The allow-list is not applied here; each URL is probed as given.
    pub async fn validate_batch(&self, urls: Vec<String>) -> BatchResult {
        let mut results = Vec::with_capacity(urls.len());

        for url in urls {
            let verdict = self.check_url_accessibility(&url).await;
            results.push(ValidationResult::new(url, verdict));
        }

        let batch = BatchResult::from_results(results);
        info!(
            total = batch.total,
            valid = batch.valid_count,
            errors = batch.error_count,
            "Batch validated"
        );
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::probe::{MockUrlProber, ProbeError};
    use mockall::Sequence;

    fn service(mock: MockUrlProber) -> ValidationService {
        ValidationService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_check_reachable_url() {
        let mut mock = MockUrlProber::new();
        mock.expect_probe()
            .withf(|url| url == "https://1drv.ms/x/abc")
            .times(1)
            .returning(|_| Ok(200));

        let verdict = service(mock)
            .check_url_accessibility("https://1drv.ms/x/abc")
            .await;

        assert!(verdict.valid);
        assert!(verdict.reason.is_none());
    }

    #[tokio::test]
    async fn test_check_forbidden_url() {
        let mut mock = MockUrlProber::new();
        mock.expect_probe().times(1).returning(|_| Ok(403));

        let verdict = service(mock)
            .check_url_accessibility("https://1drv.ms/x/abc")
            .await;

        assert!(!verdict.valid);
        let reason = verdict.reason.unwrap();
        assert!(reason.contains("Access denied"));
        assert!(reason.contains("403"));
    }

    #[tokio::test]
    async fn test_check_timeout() {
        let mut mock = MockUrlProber::new();
        mock.expect_probe()
            .times(1)
            .returning(|_| Err(ProbeError::Timeout));

        let verdict = service(mock)
            .check_url_accessibility("https://1drv.ms/x/abc")
            .await;

        assert!(!verdict.valid);
        assert!(verdict.reason.unwrap().contains("timeout"));
    }

    #[tokio::test]
    async fn test_validate_allow_listed_url() {
        let mut mock = MockUrlProber::new();
        mock.expect_probe().times(1).returning(|_| Ok(200));

        let result = service(mock).validate("https://1drv.ms/x/abc").await;

        assert_eq!(result.url, "https://1drv.ms/x/abc");
        assert!(result.valid);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_validate_skips_probe_for_other_hosts() {
        let mut mock = MockUrlProber::new();
        mock.expect_probe().times(0);

        let result = service(mock).validate("https://example.com/file").await;

        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some(NOT_ONEDRIVE_MESSAGE));
    }

    #[tokio::test]
    async fn test_validate_malformed_url_is_not_probed() {
        let mut mock = MockUrlProber::new();
        mock.expect_probe().times(0);

        let result = service(mock).validate("not a url").await;

        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some(NOT_ONEDRIVE_MESSAGE));
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let mut seq = Sequence::new();
        let mut mock = MockUrlProber::new();
        mock.expect_probe()
            .withf(|url| url == "https://1drv.ms/a")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(200));
        mock.expect_probe()
            .withf(|url| url == "https://1drv.ms/b")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(404));
        mock.expect_probe()
            .withf(|url| url == "https://1drv.ms/c")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ProbeError::Connection));

        let batch = service(mock)
            .validate_batch(vec![
                "https://1drv.ms/a".to_string(),
                "https://1drv.ms/b".to_string(),
                "https://1drv.ms/c".to_string(),
            ])
            .await;

        assert_eq!(batch.total, 3);
        assert_eq!(batch.valid_count, 1);
        assert_eq!(batch.error_count, 2);

        let urls: Vec<&str> = batch.results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            ["https://1drv.ms/a", "https://1drv.ms/b", "https://1drv.ms/c"]
        );
        assert!(batch.results[1].error.as_deref().unwrap().contains("404"));
    }

    #[tokio::test]
    async fn test_batch_does_not_apply_allow_list() {
        let mut mock = MockUrlProber::new();
        mock.expect_probe()
            .withf(|url| url == "https://example.com/file")
            .times(1)
            .returning(|_| Ok(200));

        let batch = service(mock)
            .validate_batch(vec!["https://example.com/file".to_string()])
            .await;

        assert_eq!(batch.valid_count, 1);
        assert!(batch.results[0].valid);
    }
}
