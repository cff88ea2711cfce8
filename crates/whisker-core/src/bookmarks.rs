//! Bookmark model and its line encoding.
//!
//! Bookmarks persist as one text entry per bookmark in the form
//! `Title|URL`. Decoding splits on the first `|`; entries without one are
//! legacy URL-only records and decode with the URL doubling as the title.
//! That fallback must stay: settings written by earlier releases carry such
//! entries.

use serde::{Deserialize, Serialize};

/// Separator between title and URL in the encoded form.
const SEPARATOR: char = '|';

/// A titled bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Display title. Never empty: falls back to the URL at creation.
    pub title: String,
    /// Target URL.
    pub url: String,
}

impl Bookmark {
    /// Creates a bookmark. An empty title defaults to the URL.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        let title = title.into();
        let title = if title.is_empty() { url.clone() } else { title };
        Self { title, url }
    }

    /// Encodes as a `Title|URL` settings entry.
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.title, SEPARATOR, self.url)
    }

    /// Decodes a settings entry.
    ///
    /// Splits on the first `|`. An entry without a separator decodes with
    /// the whole entry as both title and URL.
    pub fn decode(entry: &str) -> Self {
        match entry.split_once(SEPARATOR) {
            Some((title, url)) => Self::new(title, url),
            None => Self::new(entry, entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Creation Tests ====================

    #[test]
    fn new_keeps_given_title() {
        let bookmark = Bookmark::new("Example", "https://example.com");
        assert_eq!(bookmark.title, "Example");
        assert_eq!(bookmark.url, "https://example.com");
    }

    #[test]
    fn empty_title_falls_back_to_url() {
        let bookmark = Bookmark::new("", "https://example.com");
        assert_eq!(bookmark.title, "https://example.com");
    }

    // ==================== Encoding Tests ====================

    #[test]
    fn encode_joins_title_and_url() {
        let bookmark = Bookmark::new("Example", "https://example.com");
        assert_eq!(bookmark.encode(), "Example|https://example.com");
    }

    #[test]
    fn decode_splits_on_first_separator() {
        let bookmark = Bookmark::decode("Example|https://example.com");
        assert_eq!(bookmark.title, "Example");
        assert_eq!(bookmark.url, "https://example.com");
    }

    #[test]
    fn decode_keeps_later_separators_in_url() {
        let bookmark = Bookmark::decode("Docs|https://example.com/a|b");
        assert_eq!(bookmark.title, "Docs");
        assert_eq!(bookmark.url, "https://example.com/a|b");
    }

    #[test]
    fn legacy_entry_without_separator_is_url_only() {
        let bookmark = Bookmark::decode("https://example.com");
        assert_eq!(bookmark.title, "https://example.com");
        assert_eq!(bookmark.url, "https://example.com");
    }

    #[test]
    fn decode_applies_title_fallback() {
        let bookmark = Bookmark::decode("|https://example.com");
        assert_eq!(bookmark.title, "https://example.com");
        assert_eq!(bookmark.url, "https://example.com");
    }

    #[test]
    fn round_trip_preserves_order_and_content() {
        let bookmarks = vec![
            Bookmark::new("First", "https://one.test"),
            Bookmark::new("Second", "https://two.test"),
            Bookmark::new("Third", "https://three.test"),
        ];
        let decoded: Vec<Bookmark> = bookmarks
            .iter()
            .map(|b| Bookmark::decode(&b.encode()))
            .collect();
        assert_eq!(decoded, bookmarks);
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn bookmark_serialization() {
        let bookmark = Bookmark::new("Example", "https://example.com");
        let json = serde_json::to_string(&bookmark).unwrap();
        let deserialized: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(bookmark, deserialized);
    }
}
