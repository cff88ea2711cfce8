//! Shell construction parameters.
//!
//! One [`BrowserShell`](crate::BrowserShell) instance serves exactly one
//! browsing profile. The profile kind decides whether the session tab list
//! is ever read or written; everything else (home page, extensions root) is
//! plain configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use whisker_core::navigation::HOME_URL;

/// Kind of browsing profile a shell instance serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Regular profile: session and settings persist across runs.
    #[default]
    Normal,
    /// Private profile: never reads or writes the session list.
    Private,
}

impl ProfileKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Private => "private",
        }
    }

    /// Returns true for private profiles.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }

    /// Returns true if the session tab list persists for this kind.
    pub fn persists_session(&self) -> bool {
        !self.is_private()
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for one shell instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Profile kind this shell serves.
    pub profile: ProfileKind,
    /// Page opened for new tabs and empty address input.
    pub home_url: String,
    /// Directory scanned for extension bundles.
    pub extensions_root: PathBuf,
}

impl ShellConfig {
    /// Creates a normal-profile configuration with the default home page.
    pub fn new(extensions_root: impl Into<PathBuf>) -> Self {
        Self {
            profile: ProfileKind::Normal,
            home_url: HOME_URL.to_string(),
            extensions_root: extensions_root.into(),
        }
    }

    /// Sets the profile kind.
    pub fn with_profile(mut self, profile: ProfileKind) -> Self {
        self.profile = profile;
        self
    }

    /// Switches to a private profile.
    pub fn private(self) -> Self {
        self.with_profile(ProfileKind::Private)
    }

    /// Overrides the home page.
    pub fn with_home_url(mut self, url: impl Into<String>) -> Self {
        self.home_url = url.into();
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new("extensions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ProfileKind Tests ====================

    #[test]
    fn default_kind_is_normal() {
        assert_eq!(ProfileKind::default(), ProfileKind::Normal);
        assert!(!ProfileKind::Normal.is_private());
        assert!(ProfileKind::Normal.persists_session());
    }

    #[test]
    fn private_kind_never_persists_session() {
        assert!(ProfileKind::Private.is_private());
        assert!(!ProfileKind::Private.persists_session());
    }

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", ProfileKind::Normal), "normal");
        assert_eq!(format!("{}", ProfileKind::Private), "private");
    }

    #[test]
    fn kind_serialization() {
        let json = serde_json::to_string(&ProfileKind::Private).unwrap();
        assert_eq!(json, "\"private\"");
        let back: ProfileKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProfileKind::Private);
    }

    // ==================== ShellConfig Tests ====================

    #[test]
    fn new_config_uses_default_home() {
        let config = ShellConfig::new("/tmp/ext");
        assert_eq!(config.profile, ProfileKind::Normal);
        assert_eq!(config.home_url, HOME_URL);
        assert_eq!(config.extensions_root, PathBuf::from("/tmp/ext"));
    }

    #[test]
    fn builders_accumulate() {
        let config = ShellConfig::new("ext")
            .with_home_url("https://start.example/")
            .private();
        assert_eq!(config.profile, ProfileKind::Private);
        assert_eq!(config.home_url, "https://start.example/");
    }

    #[test]
    fn default_config_scans_local_extensions_dir() {
        assert_eq!(
            ShellConfig::default().extensions_root,
            PathBuf::from("extensions")
        );
    }
}
