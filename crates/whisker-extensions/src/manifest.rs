//! Bundle manifest parsing.
//!
//! A bundle's `manifest.json` is an object with three optional string
//! fields. Anything else in the file is ignored. Parsing is tolerant by
//! contract: malformed JSON, a non-object document, or a field of the wrong
//! type all degrade to the empty manifest so a broken manifest never costs a
//! bundle its payload.

use serde::{Deserialize, Serialize};

/// Parsed contents of a bundle's `manifest.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    /// Display name, overriding the bundle directory name when present.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Version string; no ordering semantics are attached.
    #[serde(default)]
    pub version: Option<String>,
}

impl BundleManifest {
    /// Parses manifest text, degrading to the empty manifest on any failure.
    pub fn parse_or_default(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    /// Resolves the display name: the manifest `name` wins over the
    /// directory-name fallback.
    pub fn resolved_name(&self, dir_name: &str) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => dir_name.to_string(),
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.version.is_none()
    }
}
