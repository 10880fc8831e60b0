//! Bare URL recognition.

use once_cell::sync::Lazy;
use regex::Regex;

/// Replaced by the detected URL in the URL hover template.
pub(crate) const URL_PLACEHOLDER: &str = "%url%";

/// Optional `http(s)://`, a dotted host of two or more characters followed
/// by a 2-4 letter top-level domain, then an optional path.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(https?)://)?([-A-Za-z0-9_.]{2,}\.[a-z]{2,4})(/\S*)?$")
        .expect("valid url regex")
});

/// Check whether `candidate` is a URL in its entirety.
///
/// # Examples
///
/// ```
/// use minedown::parser::is_url;
///
/// assert!(is_url("https://example.com/path"));
/// assert!(is_url("example.com"));
/// assert!(!is_url("example"));
/// assert!(!is_url("see example.com"));
/// ```
pub fn is_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}

/// Prefix `http://` unless the URL already names a scheme.
pub(crate) fn with_url_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}
