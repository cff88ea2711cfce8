//! Built-in extensions.
//!
//! The dark mode bundle ships with the browser and is materialized into the
//! extensions root on startup so users can inspect, edit, or delete its
//! files like any hand-installed bundle. Each file is only written when
//! missing, so user edits survive restarts and deleting `styles.css` keeps
//! it gone.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ExtensionError, Result};
use crate::registry::{MANIFEST_FILE, STYLE_FILE};

/// Directory name of the bundled dark mode extension.
pub const DARK_MODE_DIR: &str = "darkmode";

const DARK_MODE_MANIFEST: &str = r#"{
  "name": "Dark Mode",
  "description": "Forces dark mode on all sites",
  "version": "1.0"
}
"#;

const DARK_MODE_STYLES: &str = r#"html, body {
    background: #111 !important;
    color: #eee !important;
}
img, video {
    filter: brightness(0.8) contrast(1.2);
}
a {
    color: #4aa3ff !important;
}
"#;

/// Seeds the dark mode bundle under the extensions root.
///
/// Returns `true` when at least one file was written. Call this before
/// scanning so a fresh profile still gets the bundle into its catalog.
pub fn ensure_dark_mode(root: &Path) -> Result<bool> {
    let bundle = root.join(DARK_MODE_DIR);
    fs::create_dir_all(&bundle).map_err(ExtensionError::Seed)?;

    let wrote_manifest = write_if_missing(&bundle.join(MANIFEST_FILE), DARK_MODE_MANIFEST)?;
    let wrote_styles = write_if_missing(&bundle.join(STYLE_FILE), DARK_MODE_STYLES)?;

    let seeded = wrote_manifest || wrote_styles;
    if seeded {
        info!(bundle = %bundle.display(), "seeded dark mode extension");
    } else {
        debug!(bundle = %bundle.display(), "dark mode extension already present");
    }
    Ok(seeded)
}

fn write_if_missing(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, content).map_err(ExtensionError::Seed)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ExtensionRegistry;
    use tempfile::TempDir;

    #[test]
    fn seeds_both_files_on_fresh_root() {
        let tmp = TempDir::new().unwrap();
        let seeded = ensure_dark_mode(tmp.path()).unwrap();
        assert!(seeded);

        let bundle = tmp.path().join(DARK_MODE_DIR);
        let manifest = fs::read_to_string(bundle.join(MANIFEST_FILE)).unwrap();
        let styles = fs::read_to_string(bundle.join(STYLE_FILE)).unwrap();
        assert!(manifest.contains("\"name\": \"Dark Mode\""));
        assert!(styles.contains("background: #111 !important;"));
        assert!(styles.contains("color: #4aa3ff !important;"));
    }

    #[test]
    fn second_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(ensure_dark_mode(tmp.path()).unwrap());
        assert!(!ensure_dark_mode(tmp.path()).unwrap());
    }

    #[test]
    fn user_edits_are_preserved() {
        let tmp = TempDir::new().unwrap();
        ensure_dark_mode(tmp.path()).unwrap();

        let styles = tmp.path().join(DARK_MODE_DIR).join(STYLE_FILE);
        fs::write(&styles, "body { background: #000; }").unwrap();
        ensure_dark_mode(tmp.path()).unwrap();
        assert_eq!(
            fs::read_to_string(&styles).unwrap(),
            "body { background: #000; }"
        );
    }

    #[test]
    fn seeded_bundle_loads_under_manifest_name() {
        let tmp = TempDir::new().unwrap();
        ensure_dark_mode(tmp.path()).unwrap();

        let catalog = ExtensionRegistry::new(tmp.path()).scan().unwrap();
        let extension = catalog.get("Dark Mode").unwrap();
        assert!(extension.has_style());
        assert!(!extension.has_script());
        assert_eq!(extension.manifest.version.as_deref(), Some("1.0"));
    }
}
