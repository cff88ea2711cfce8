//! Whisker Shell - headless browser shell wiring.
//!
//! Composes the filter, extension catalog, and persistence store behind one
//! [`BrowserShell`] the chrome layer drives:
//!
//! - [`shell`] - the shell itself: startup restore, engine event handlers,
//!   and the user-facing operations
//! - [`config`] - per-shell configuration and the browsing profile kind
//! - [`tabs`] - the ordered open-tab list mirroring engine pages
//!
//! ## Example
//!
//! ```no_run
//! use whisker_core::engine::WebEngine;
//! use whisker_core::status::NullStatus;
//! use whisker_shell::{BrowserShell, ShellConfig};
//! use whisker_storage::{PersistenceStore, SqliteSettings};
//!
//! fn launch(engine: impl WebEngine) -> whisker_storage::Result<()> {
//!     let store = PersistenceStore::new(SqliteSettings::in_memory()?);
//!     let config = ShellConfig::new("extensions");
//!     let mut shell = BrowserShell::start(engine, store, config, NullStatus);
//!
//!     let page = shell.open_tab("https://example.com/");
//!     shell.page_load_finished(page, true);
//!     shell.shutdown();
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod shell;
pub mod tabs;

pub use config::{ProfileKind, ShellConfig};
pub use shell::{error_page_html, BrowserShell};
pub use tabs::{Tab, TabStrip};
