//! Whisker Storage - persistent settings for the browser shell.
//!
//! The shell's durable state (filter configuration, bookmarks, session tab
//! list, user-agent override) lives in an opaque string-keyed settings
//! backend. This crate defines that backend contract ([`SettingsBackend`]),
//! ships the SQLite implementation ([`SqliteSettings`]), and layers the
//! typed, defensive accessors of [`PersistenceStore`] on top.
//!
//! # Example
//!
//! ```
//! use whisker_storage::{PersistenceStore, SqliteSettings};
//! use whisker_core::Bookmark;
//!
//! let store = PersistenceStore::new(SqliteSettings::in_memory().unwrap());
//!
//! // Absent keys read as their documented defaults.
//! assert!(store.adblock_enabled());
//!
//! store
//!     .set_bookmarks(&[Bookmark::new("Example", "https://example.com")])
//!     .unwrap();
//! assert_eq!(store.bookmarks()[0].title, "Example");
//! ```

pub mod backend;
pub mod error;
mod schema;
pub mod store;

pub use backend::{AppIdentity, SettingsBackend, SqliteSettings};
pub use error::{Result, StorageError};
pub use store::{keys, PersistenceStore};
