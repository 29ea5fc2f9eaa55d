//! Error types for shortcut operations.

use std::path::PathBuf;
use thiserror::Error;

use steamvdf_codec::VdfError;

/// Errors that can occur when reading, updating or locating shortcuts.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// The shortcuts file could not be decoded or encoded.
    #[error(transparent)]
    Vdf(#[from] VdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller-supplied configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No Steam data directory exists at any known location.
    #[error("Steam data directory not found (searched: {searched})")]
    DataDirNotFound { searched: String },

    /// A required directory does not exist.
    #[error("directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    /// The account has no grid image directory.
    #[error("no grid directory for user {user_id}")]
    NoGridDirectory { user_id: String },
}

/// Result type alias for shortcut operations.
pub type Result<T> = std::result::Result<T, ShortcutError>;

impl ShortcutError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
