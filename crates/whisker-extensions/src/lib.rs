//! Extension loading and page injection for the Whisker browser.
//!
//! Extensions are plain directories under a single root: an optional
//! `manifest.json` for display metadata, an optional `content.js` run in
//! every page, and an optional `styles.css` applied to every page. There is
//! no permission model and no lifecycle beyond load-and-inject.
//!
//! ## Features
//!
//! - One-shot bundle discovery with a forgiving parser ([`registry`])
//! - Stable, name-ordered injection on page load ([`inject`])
//! - The built-in dark mode bundle, seeded on first run ([`bundled`])
//!
//! ## Usage
//!
//! ```no_run
//! use whisker_extensions::{ensure_dark_mode, ExtensionRegistry, InjectionDriver};
//! # use whisker_core::engine::{PageId, WebEngine};
//! # fn demo(engine: &mut impl WebEngine, page: PageId) -> whisker_extensions::Result<()> {
//! let registry = ExtensionRegistry::new("extensions");
//! ensure_dark_mode(registry.root())?;
//! let catalog = registry.scan()?;
//!
//! let driver = InjectionDriver::new();
//! driver.on_page_load_finished(engine, page, &catalog);
//! # Ok(())
//! # }
//! ```

pub mod bundled;
pub mod error;
pub mod inject;
pub mod manifest;
pub mod registry;

pub use bundled::ensure_dark_mode;
pub use error::{ExtensionError, Result};
pub use inject::{InjectionDriver, InjectionPass};
pub use manifest::BundleManifest;
pub use registry::{Catalog, Extension, ExtensionRegistry};
