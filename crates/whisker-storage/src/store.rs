//! Typed accessors over the settings backend.
//!
//! [`PersistenceStore`] owns the at-rest representation of the filter state,
//! bookmark list, session tab list, and user-agent override. Reads are
//! defensive by contract: a missing key, a backend failure, or a value of
//! the wrong shape all yield the documented default, never an error. Writes
//! return a [`Result`] so callers can report best-effort persistence
//! failures without crashing.
//!
//! Bookmarks keep their legacy line encoding (`Title|URL`, entries without a
//! separator decode as URL-only) so settings written by earlier releases
//! still load.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use whisker_core::bookmarks::Bookmark;
use whisker_core::filter::FilterState;

use crate::backend::SettingsBackend;
use crate::error::Result;

/// Settings keys used by the store.
pub mod keys {
    /// Whether ad blocking is active. Boolean, default `true`.
    pub const ADBLOCK_ENABLED: &str = "adblock/enabled";
    /// Configured block patterns, in order. Empty means built-in defaults.
    pub const ADBLOCK_PATTERNS: &str = "adblock/patterns";
    /// Custom user-agent string. Empty means the engine default.
    pub const USER_AGENT: &str = "browser/user_agent";
    /// Encoded bookmark entries (`Title|URL`), in order.
    pub const BOOKMARKS: &str = "bookmarks/list";
    /// Open-tab URLs of the last non-private session, in tab order.
    pub const SESSION_URLS: &str = "session/urls";
}

/// Typed persistent state for one browsing profile.
#[derive(Debug, Clone)]
pub struct PersistenceStore<B: SettingsBackend> {
    backend: B,
}

impl<B: SettingsBackend> PersistenceStore<B> {
    /// Wraps a settings backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads a typed value, falling back to `default` when the key is
    /// absent, the backend fails, or the stored value has the wrong shape.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.backend.get(key) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(value) => value,
                Err(e) => {
                    debug!(key, error = %e, "stored value has unexpected shape, using default");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                debug!(key, error = %e, "settings read failed, using default");
                default
            }
        }
    }

    fn set_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.backend.set(key, &serde_json::to_value(value)?)
    }

    // ==================== Ad blocking ====================

    /// Whether ad blocking is enabled. Defaults to `true`.
    pub fn adblock_enabled(&self) -> bool {
        self.get_or(keys::ADBLOCK_ENABLED, true)
    }

    /// Persists the ad-block enabled flag.
    pub fn set_adblock_enabled(&self, enabled: bool) -> Result<()> {
        self.set_value(keys::ADBLOCK_ENABLED, &enabled)
    }

    /// The configured block patterns. Defaults to an empty list, which the
    /// filter treats as "use the built-in defaults".
    pub fn adblock_patterns(&self) -> Vec<String> {
        self.get_or(keys::ADBLOCK_PATTERNS, Vec::new())
    }

    /// Persists the configured block patterns.
    pub fn set_adblock_patterns(&self, patterns: &[String]) -> Result<()> {
        self.set_value(keys::ADBLOCK_PATTERNS, &patterns)
    }

    /// The persisted filter state: enabled flag plus configured patterns.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            enabled: self.adblock_enabled(),
            patterns: self.adblock_patterns(),
        }
    }

    /// Persists both halves of the filter state.
    pub fn save_filter_state(&self, state: &FilterState) -> Result<()> {
        self.set_adblock_enabled(state.enabled)?;
        self.set_adblock_patterns(&state.patterns)
    }

    // ==================== User agent ====================

    /// The user-agent override. Empty means no override.
    pub fn user_agent(&self) -> String {
        self.get_or(keys::USER_AGENT, String::new())
    }

    /// Persists the user-agent override. Empty clears it.
    pub fn set_user_agent(&self, user_agent: &str) -> Result<()> {
        self.set_value(keys::USER_AGENT, &user_agent)
    }

    // ==================== Bookmarks ====================

    /// The bookmark list, decoded from its line encoding, in saved order.
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.get_or::<Vec<String>>(keys::BOOKMARKS, Vec::new())
            .iter()
            .map(|entry| Bookmark::decode(entry))
            .collect()
    }

    /// Persists the bookmark list in its line encoding.
    pub fn set_bookmarks(&self, bookmarks: &[Bookmark]) -> Result<()> {
        let entries: Vec<String> = bookmarks.iter().map(Bookmark::encode).collect();
        self.set_value(keys::BOOKMARKS, &entries)
    }

    // ==================== Session ====================

    /// The saved session: one URL per open tab, in tab order.
    pub fn session_urls(&self) -> Vec<String> {
        self.get_or(keys::SESSION_URLS, Vec::new())
    }

    /// Persists the session tab list.
    pub fn set_session_urls(&self, urls: &[String]) -> Result<()> {
        self.set_value(keys::SESSION_URLS, &urls)
    }
}
