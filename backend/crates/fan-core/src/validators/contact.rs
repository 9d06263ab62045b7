use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Permissive `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Absolute URL with a host; relative references are rejected
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).map(|url| url.has_host()).unwrap_or(false)
}
