//! Storage error types.

use thiserror::Error;

/// Errors that can occur in storage operations.
///
/// Only writes surface these to callers; read accessors on the store recover
/// with defaults instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from rusqlite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be encoded or decoded as JSON.
    #[error("value encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error creating the data directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform data directory could not be resolved.
    #[error("data directory unavailable: {0}")]
    DataDir(String),

    /// The settings backend is unusable (poisoned connection lock).
    #[error("settings backend unavailable: {0}")]
    Backend(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
