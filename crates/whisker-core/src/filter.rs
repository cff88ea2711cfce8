//! Request-time ad blocking.
//!
//! This module owns the block-pattern list and the per-request decision. A URL
//! is blocked when its lowercased form contains any active pattern as a plain
//! substring. There is no anchoring, no wildcard syntax, and no regex support;
//! the filter is intentionally the simplest thing that works at request time.
//!
//! ## Toggling
//!
//! Disabling the filter empties the *active* list so every decision is
//! `false`, but the configured list is kept and restored verbatim on
//! re-enable. A filter with no configured patterns falls back to
//! [`DEFAULT_BLOCK_PATTERNS`].
//!
//! ## Usage
//!
//! ```
//! use whisker_core::filter::RequestFilter;
//!
//! let filter = RequestFilter::new();
//! assert!(filter.should_block("https://ads.example.com/banner.js"));
//! assert!(!filter.should_block("https://example.com/page"));
//! ```

use serde::{Deserialize, Serialize};

/// Built-in block patterns, used whenever no custom patterns are configured.
pub const DEFAULT_BLOCK_PATTERNS: &[&str] = &[
    "doubleclick.net",
    "googlesyndication",
    "adservice.google.",
    "pagead2.googlesyndication.com",
    "/ads?",
    "/adserver",
    ".ads.",
    "ads.",
    "advert",
    "adclick",
    "tracking",
    "analytics.js",
    "googletagservices",
    "adsystem",
];

/// Persistable snapshot of the filter: the enabled flag plus the configured
/// pattern list.
///
/// The configured list survives disabling; `enabled = false` only empties the
/// effective set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Whether blocking is active.
    pub enabled: bool,
    /// Configured patterns, in order. Empty means "use the built-in defaults".
    pub patterns: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            enabled: true,
            patterns: Vec::new(),
        }
    }
}

/// Substring-based request filter.
///
/// `should_block` runs inline with every outgoing request, so it performs no
/// I/O and no logging; the only per-call allocation is the lowercased URL.
/// Patterns are lowercased once at set-time.
#[derive(Debug, Clone)]
pub struct RequestFilter {
    enabled: bool,
    /// Configured patterns in persisted form (lowercase, order preserved).
    configured: Vec<String>,
    /// Effective patterns consulted per request. Empty while disabled.
    active: Vec<String>,
}

impl RequestFilter {
    /// Creates an enabled filter with the built-in default patterns active.
    pub fn new() -> Self {
        Self::restore(FilterState::default())
    }

    /// Rebuilds a filter from a persisted snapshot.
    pub fn restore(state: FilterState) -> Self {
        let mut filter = Self {
            enabled: state.enabled,
            configured: state
                .patterns
                .into_iter()
                .map(|p| p.to_lowercase())
                .collect(),
            active: Vec::new(),
        };
        filter.rebuild_active();
        filter
    }

    /// Returns a snapshot suitable for persistence.
    ///
    /// The snapshot always carries the configured list, even while disabled.
    pub fn state(&self) -> FilterState {
        FilterState {
            enabled: self.enabled,
            patterns: self.configured.clone(),
        }
    }

    /// Decides whether a request for `url` should be blocked.
    pub fn should_block(&self, url: &str) -> bool {
        if self.active.is_empty() {
            return false;
        }
        let url = url.to_lowercase();
        self.active.iter().any(|p| url.contains(p.as_str()))
    }

    /// Replaces the configured pattern list.
    ///
    /// Patterns are lowercased here so `should_block` never has to. An empty
    /// list means "use the built-in defaults".
    pub fn set_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configured = patterns
            .into_iter()
            .map(|p| p.into().to_lowercase())
            .collect();
        self.rebuild_active();
    }

    /// Enables or disables blocking without touching the configured list.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.rebuild_active();
    }

    /// Flips the enabled flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    /// Returns true if blocking is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the configured patterns (the persisted form).
    pub fn patterns(&self) -> &[String] {
        &self.configured
    }

    /// Returns the patterns currently consulted per request.
    pub fn active_patterns(&self) -> &[String] {
        &self.active
    }

    fn rebuild_active(&mut self) {
        self.active = if !self.enabled {
            Vec::new()
        } else if self.configured.is_empty() {
            DEFAULT_BLOCK_PATTERNS.iter().map(|p| p.to_string()).collect()
        } else {
            self.configured.clone()
        };
    }
}

impl Default for RequestFilter {
    fn default() -> Self {
        Self::new()
    }
}
