//! Address-bar input normalization and the scheme-based security indicator.
//!
//! Free-form address input becomes a loadable URL: bare hostnames get an
//! `https://` prefix, anything that does not look like a host becomes a
//! search query, and empty input falls back to the home page.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use url::Url;

/// Home page, also the fallback for empty address input.
pub const HOME_URL: &str = "https://duckduckgo.com/";

/// Search endpoint used when address input is not a URL. The query is
/// form-encoded and appended.
const SEARCH_URL: &str = "https://duckduckgo.com/?q=";

/// Turns free-form address-bar text into a loadable URL.
///
/// Rules, in order:
/// - empty (after trimming) loads [`HOME_URL`]
/// - no whitespace, contains a dot, no scheme separator: prefix `https://`
/// - no scheme separator otherwise: search for the text
/// - anything else passes through verbatim
pub fn normalize_url(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return HOME_URL.to_string();
    }
    let has_scheme = text.contains("://");
    let has_space = text.contains(' ');
    let has_dot = text.contains('.');
    if !has_space && has_dot && !has_scheme {
        return format!("https://{text}");
    }
    if !has_scheme {
        let query: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
        return format!("{SEARCH_URL}{query}");
    }
    text.to_string()
}

/// Connection security shown next to the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityIndicator {
    /// HTTPS or an internal page.
    Secure,
    /// Plain HTTP.
    Insecure,
    /// Unparseable URL or a scheme with no security story (file, about).
    #[default]
    Unknown,
}

impl SecurityIndicator {
    /// Classifies a URL by scheme.
    pub fn for_url(url: &str) -> Self {
        match Url::parse(url) {
            Ok(parsed) => match parsed.scheme() {
                "https" | "chrome" => Self::Secure,
                "http" => Self::Insecure,
                _ => Self::Unknown,
            },
            Err(_) => Self::Unknown,
        }
    }

    /// Returns the indicator as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secure => "secure",
            Self::Insecure => "insecure",
            Self::Unknown => "unknown",
        }
    }

    /// Glyph for the toolbar lock label.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Secure => "\u{1F512}",
            Self::Insecure => "\u{26A0}\u{FE0F}",
            Self::Unknown => " ",
        }
    }

    /// Tooltip for the toolbar lock label.
    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Secure => "Secure connection (HTTPS)",
            Self::Insecure => "Not secure (HTTP)",
            Self::Unknown => "",
        }
    }

    /// Returns true for secure connections.
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Secure)
    }
}

impl std::fmt::Display for SecurityIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
