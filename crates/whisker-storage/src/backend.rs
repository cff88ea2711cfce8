//! The opaque settings backend and its SQLite implementation.
//!
//! Consumers treat the backend as a persistent dictionary: string keys, JSON
//! values, no schema knowledge. [`SqliteSettings`] is the implementation the
//! shell ships, a single-table key-value store under the platform data
//! directory for an [`AppIdentity`]. Tests use [`SqliteSettings::in_memory`]
//! or their own fakes.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use directories::ProjectDirs;
use rusqlite::{params, Connection};
use serde_json::Value;
use tracing::info;

use crate::error::{Result, StorageError};
use crate::schema::run_migrations;

/// File name of the settings database inside the data directory.
const SETTINGS_FILE: &str = "settings.db";

/// Reverse-domain qualifier used when resolving the platform data directory.
const DIR_QUALIFIER: &str = "org";

/// String-keyed persistent dictionary of JSON values.
///
/// Reads and writes are synchronous and local. Implementations report
/// failures through [`StorageError`]; the typed store above this trait turns
/// read failures into defaults.
pub trait SettingsBackend {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &Value) -> Result<()>;

    /// Deletes the value under `key`. Returns true if one was present.
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Organization/application pair that scopes where settings live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    /// Organization segment of the platform data directory path.
    pub organization: String,
    /// Application segment of the platform data directory path.
    pub application: String,
}

impl AppIdentity {
    /// Creates an identity from an organization and application name.
    pub fn new(organization: impl Into<String>, application: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            application: application.into(),
        }
    }

    /// Resolves the platform data directory for this identity.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let dirs = ProjectDirs::from(DIR_QUALIFIER, &self.organization, &self.application)
            .ok_or_else(|| {
                StorageError::DataDir("could not determine platform data directory".into())
            })?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self::new("whisker-browser", "whisker")
    }
}

/// SQLite-backed settings dictionary.
///
/// One row per key, values stored as JSON text, upserted on write. The
/// connection is guarded by a mutex; clones share it, so one backend can be
/// handed to several consumers.
#[derive(Clone)]
pub struct SqliteSettings {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSettings {
    /// Opens the settings database in the data directory for `identity`,
    /// creating directory, file, and schema as needed.
    pub fn open(identity: &AppIdentity) -> Result<Self> {
        let dir = identity.data_dir()?;
        fs::create_dir_all(&dir)?;
        let path = dir.join(SETTINGS_FILE);

        info!(path = %path.display(), "opening settings database");
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a settings database at an explicit path.
    pub fn with_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "opening settings database");
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory settings database (for testing).
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // WAL keeps readers unblocked during writes; NORMAL sync is a
        // reasonable durability trade for local settings.
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Backend("settings connection poisoned".to_string()))
    }
}

impl SettingsBackend for SqliteSettings {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let conn = self.lock()?;
        let text: Option<String> = conn
            .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .ok();

        match text {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let text = serde_json::to_string(value)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, text],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM settings WHERE key = ?1", [key])?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    // ==================== Backend Tests ====================

    #[test]
    fn set_and_get_round_trip() {
        let backend = SqliteSettings::in_memory().unwrap();

        backend.set("greeting", &json!("hello")).unwrap();
        assert_eq!(backend.get("greeting").unwrap(), Some(json!("hello")));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let backend = SqliteSettings::in_memory().unwrap();
        assert!(backend.get("nothing-here").unwrap().is_none());
    }

    #[test]
    fn set_overwrites_existing_value() {
        let backend = SqliteSettings::in_memory().unwrap();

        backend.set("key", &json!("first")).unwrap();
        backend.set("key", &json!("second")).unwrap();
        assert_eq!(backend.get("key").unwrap(), Some(json!("second")));
    }

    #[test]
    fn remove_reports_presence() {
        let backend = SqliteSettings::in_memory().unwrap();

        backend.set("doomed", &json!(1)).unwrap();
        assert!(backend.remove("doomed").unwrap());
        assert!(backend.get("doomed").unwrap().is_none());
        assert!(!backend.remove("doomed").unwrap());
    }

    #[test]
    fn structured_values_survive() {
        let backend = SqliteSettings::in_memory().unwrap();

        let value = json!({"enabled": true, "patterns": ["ads.", "tracking"]});
        backend.set("complex", &value).unwrap();
        assert_eq!(backend.get("complex").unwrap(), Some(value));
    }

    #[test]
    fn clones_share_the_store() {
        let backend = SqliteSettings::in_memory().unwrap();
        let other = backend.clone();

        backend.set("shared", &json!(42)).unwrap();
        assert_eq!(other.get("shared").unwrap(), Some(json!(42)));
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn values_persist_across_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.db");

        {
            let backend = SqliteSettings::with_path(&path).unwrap();
            backend.set("sticky", &json!(["a", "b"])).unwrap();
        }

        let backend = SqliteSettings::with_path(&path).unwrap();
        assert_eq!(backend.get("sticky").unwrap(), Some(json!(["a", "b"])));
    }

    // ==================== AppIdentity Tests ====================

    #[test]
    fn default_identity_is_whisker() {
        let identity = AppIdentity::default();
        assert_eq!(identity.organization, "whisker-browser");
        assert_eq!(identity.application, "whisker");
    }

    #[test]
    fn identity_resolves_a_data_dir() {
        let identity = AppIdentity::new("whisker-test-org", "whisker-test-app");
        let dir = identity.data_dir().unwrap();
        assert!(dir.to_string_lossy().contains("whisker-test-app"));
    }
}
