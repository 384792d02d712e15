//! DTOs for the batch validation endpoint.

use serde::Deserialize;
use serde_json::{Map, Value};

pub const INVALID_URL_LIST: &str = "Invalid URL list";

/// Request to validate several URLs.
///
/// Only JSON objects are accepted. `urls` is kept loose so that a missing
/// field, a non-array value and an empty array can all be answered with the
/// same `400`.
#[derive(Debug, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ValidateBatchRequest {
    pub urls: Option<UrlList>,
}

impl TryFrom<Map<String, Value>> for ValidateBatchRequest {
    type Error = serde_json::Error;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        let urls = body
            .remove("urls")
            .map(serde_json::from_value)
            .transpose()?;

        Ok(Self { urls })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UrlList {
    Items(Vec<BatchItem>),
    Other(Value),
}

/// One entry of the batch.
///
/// Clients send either plain strings or objects such as the ones returned by
/// a QR scanner (`{"url": "...", "label": "..."}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BatchItem {
    Raw(String),
    WithUrl { url: Option<String> },
    Other(Value),
}

impl BatchItem {
    /// Resolves the entry to the URL string that will be probed.
    ///
    /// Objects without a `url` resolve to an empty string; any other JSON
    /// value resolves to its JSON text. Neither is a probe-able URL, so both
    /// end up as invalid results instead of failing the batch.
    pub fn into_url(self) -> String {
        match self {
            Self::Raw(url) => url,
            Self::WithUrl { url } => url.unwrap_or_default(),
            Self::Other(value) => value.to_string(),
        }
    }
}

impl ValidateBatchRequest {
    /// Returns the normalized URL list, or `None` when the list is missing,
    /// empty or not an array.
    pub fn into_urls(self) -> Option<Vec<String>> {
        match self.urls? {
            UrlList::Items(items) if !items.is_empty() => {
                Some(items.into_iter().map(BatchItem::into_url).collect())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(json: &str) -> Option<Vec<String>> {
        serde_json::from_str::<ValidateBatchRequest>(json)
            .unwrap()
            .into_urls()
    }

    #[test]
    fn test_mixed_strings_and_objects() {
        let urls = urls(r#"{"urls": ["https://1drv.ms/a", {"url": "https://1drv.ms/b"}]}"#);
        assert_eq!(
            urls,
            Some(vec![
                "https://1drv.ms/a".to_string(),
                "https://1drv.ms/b".to_string()
            ])
        );
    }

    #[test]
    fn test_object_extra_fields_are_ignored() {
        let urls = urls(r#"{"urls": [{"url": "https://1drv.ms/a", "label": "Menu"}]}"#);
        assert_eq!(urls, Some(vec!["https://1drv.ms/a".to_string()]));
    }

    #[test]
    fn test_object_without_url_resolves_to_empty() {
        let urls = urls(r#"{"urls": [{"label": "Menu"}]}"#);
        assert_eq!(urls, Some(vec![String::new()]));
    }

    #[test]
    fn test_other_values_resolve_to_json_text() {
        let urls = urls(r#"{"urls": [42, {"url": 7}]}"#);
        assert_eq!(
            urls,
            Some(vec!["42".to_string(), r#"{"url":7}"#.to_string()])
        );
    }

    #[test]
    fn test_missing_empty_or_non_array_list() {
        assert_eq!(urls("{}"), None);
        assert_eq!(urls(r#"{"urls": null}"#), None);
        assert_eq!(urls(r#"{"urls": []}"#), None);
        assert_eq!(urls(r#"{"urls": "not-a-list"}"#), None);
        assert_eq!(urls(r#"{"urls": {"url": "https://1drv.ms/a"}}"#), None);
    }

    #[test]
    fn test_only_objects_are_accepted() {
        for body in [r#"[["https://1drv.ms/a"]]"#, r#""https://1drv.ms/a""#, "null"] {
            assert!(serde_json::from_str::<ValidateBatchRequest>(body).is_err(), "{}", body);
        }
    }
}
