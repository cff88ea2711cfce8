//! Error types for extension discovery and seeding.

use thiserror::Error;

/// Errors from the extension subsystem.
///
/// Per-bundle and per-file problems are tolerated during a scan and never
/// reach this type; only the bundle root itself can fail a scan.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// The bundle root directory could not be created or read.
    #[error("extension root unavailable: {0}")]
    Root(#[from] std::io::Error),

    /// A bundled extension could not be written out.
    #[error("failed to seed bundled extension: {0}")]
    Seed(std::io::Error),
}

/// Result type for extension operations.
pub type Result<T> = std::result::Result<T, ExtensionError>;
