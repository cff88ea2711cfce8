//! Extension bundle discovery.
//!
//! A bundle is one immediate subdirectory of the extensions root holding up
//! to three files, each optional: `manifest.json`, `content.js`,
//! `styles.css`. The registry scans the root once per shell lifetime and
//! builds a [`Catalog`] keyed by resolved name.
//!
//! Scanning is deliberately forgiving: a malformed manifest falls back to
//! the directory name, an unreadable file counts as absent, and only a
//! bundle with no payload at all is dropped. Bundle directories are visited
//! in lexicographic name order so the catalog (and therefore injection
//! order) does not depend on filesystem iteration order.
//!
//! ## Usage
//!
//! ```no_run
//! use whisker_extensions::registry::ExtensionRegistry;
//!
//! let registry = ExtensionRegistry::new("extensions");
//! let catalog = registry.scan().unwrap();
//! for extension in catalog.iter() {
//!     println!("{}", extension.name);
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::manifest::BundleManifest;

/// Manifest file name inside a bundle directory.
pub const MANIFEST_FILE: &str = "manifest.json";
/// Content script file name inside a bundle directory.
pub const SCRIPT_FILE: &str = "content.js";
/// Stylesheet file name inside a bundle directory.
pub const STYLE_FILE: &str = "styles.css";

// =============================================================================
// Extension and Catalog
// =============================================================================

/// One loaded extension bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Resolved display name: manifest `name` or the directory name.
    pub name: String,
    /// Parsed manifest; empty when missing or malformed.
    pub manifest: BundleManifest,
    /// Raw stylesheet text, when `styles.css` had content.
    pub style_sheet: Option<String>,
    /// Raw script text, when `content.js` had content.
    pub content_script: Option<String>,
}

impl Extension {
    /// Returns true if the bundle carries a stylesheet.
    pub fn has_style(&self) -> bool {
        self.style_sheet.is_some()
    }

    /// Returns true if the bundle carries a content script.
    pub fn has_script(&self) -> bool {
        self.content_script.is_some()
    }

    /// Returns true if there is anything to inject.
    pub fn has_payload(&self) -> bool {
        self.has_style() || self.has_script()
    }
}

/// Ordered mapping from resolved extension name to its loaded artifacts.
///
/// Enumeration order is lexicographic by name, which fixes the injection
/// order. When two bundles resolve to the same name the later-scanned one
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, Extension>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an extension under its resolved name, returning any displaced
    /// entry with the same name.
    pub fn insert(&mut self, extension: Extension) -> Option<Extension> {
        self.entries.insert(extension.name.clone(), extension)
    }

    /// Looks up an extension by name.
    pub fn get(&self, name: &str) -> Option<&Extension> {
        self.entries.get(name)
    }

    /// Returns true if an extension with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates extensions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.entries.values()
    }

    /// Iterates extension names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of loaded extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no extension loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Scans the extensions root and produces the catalog.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    root: PathBuf,
}

impl ExtensionRegistry {
    /// Creates a registry over the given bundle root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The bundle root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scans the root and builds the catalog.
    ///
    /// The root is created if missing (first run). The only error is an
    /// uncreatable or unreadable root; everything below it is tolerated
    /// per bundle and per file.
    pub fn scan(&self) -> Result<Catalog> {
        fs::create_dir_all(&self.root)?;

        let mut dirs: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if path.is_dir() {
                let name = entry.file_name().to_string_lossy().into_owned();
                dirs.push((name, path));
            }
        }
        // Fixed scan order regardless of filesystem listing order.
        dirs.sort_by(|a, b| a.0.cmp(&b.0));

        let discovered = dirs.len();
        let mut catalog = Catalog::new();
        for (dir_name, path) in dirs {
            match load_bundle(&dir_name, &path) {
                Some(extension) => {
                    if let Some(displaced) = catalog.insert(extension) {
                        warn!(
                            name = %displaced.name,
                            "bundle name collision, keeping the later-scanned bundle"
                        );
                    }
                }
                None => {
                    debug!(bundle = %dir_name, "bundle has no payload, dropped");
                }
            }
        }

        info!(
            root = %self.root.display(),
            discovered,
            loaded = catalog.len(),
            "extension scan complete"
        );
        Ok(catalog)
    }
}

/// Loads one bundle directory. Returns `None` when the bundle has no
/// payload.
fn load_bundle(dir_name: &str, path: &Path) -> Option<Extension> {
    let manifest = match read_artifact(&path.join(MANIFEST_FILE)) {
        Some(text) => BundleManifest::parse_or_default(&text),
        None => BundleManifest::default(),
    };
    let style_sheet = read_artifact(&path.join(STYLE_FILE));
    let content_script = read_artifact(&path.join(SCRIPT_FILE));

    let extension = Extension {
        name: manifest.resolved_name(dir_name),
        manifest,
        style_sheet,
        content_script,
    };
    extension.has_payload().then_some(extension)
}

/// Reads one bundle file as text. A missing file is silently absent; an
/// unreadable or empty file is absent too, the former with a warning.
fn read_artifact(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) if text.is_empty() => None,
        Ok(text) => Some(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read bundle file");
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
