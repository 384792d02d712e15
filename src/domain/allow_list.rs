//! Host allow-list for OneDrive and SharePoint links.

use url::Url;

/// Hosts (or host fragments) recognised as Microsoft cloud-storage links.
pub const ONEDRIVE_DOMAINS: [&str; 5] = [
    "sharepoint.com",
    "1drv.ms",
    "onedrive.live.com",
    "onedrive.com",
    "my.sharepoint.com",
];

/// Returns `true` if the URL's host belongs to OneDrive or SharePoint.
///
/// Matching is case-insensitive. A host matches when it ends with one of
/// [`ONEDRIVE_DOMAINS`] or contains one of them anywhere, so hosts such as
/// `evil-sharepoint.com.attacker.net` are accepted as well. Callers that need
/// a strict check must not rely on this function alone.
///
/// Only the host is compared; userinfo is ignored, so
/// `https://sharepoint.com@evil.com/` does not match.
///
/// URLs that cannot be parsed, or that carry no host, never match.
///
/// # Examples
///
/// ```
/// use qr_link_validator::domain::allow_list::is_onedrive_url;
///
/// assert!(is_onedrive_url("https://1drv.ms/x/s!abc"));
/// assert!(is_onedrive_url("https://Contoso.SharePoint.com/sites/team"));
/// assert!(!is_onedrive_url("https://example.com/file"));
/// assert!(!is_onedrive_url("not a url"));
/// ```
pub fn is_onedrive_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(&url.to_lowercase()) else {
        return false;
    };

    let Some(host) = parsed.host_str() else {
        return false;
    };

    ONEDRIVE_DOMAINS
        .iter()
        .any(|domain| host.ends_with(domain) || host.contains(domain))
}
