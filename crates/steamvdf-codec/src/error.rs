//! Error types for VDF operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::record::Record;
use crate::types::FormatVersion;

/// Errors that can occur when reading or writing VDF streams.
#[derive(Debug, Error)]
pub enum VdfError {
    /// Stream header or footer is missing, or the name tag does not match.
    #[error("malformed header: {message}")]
    MalformedHeader { message: String },

    /// A type tag byte outside `0x00`, `0x01`, `0x02`.
    #[error("unknown field type 0x{tag:02x} at offset {offset}")]
    UnknownFieldType { tag: u8, offset: usize },

    /// A field value ended before its terminator or byte count.
    #[error("truncated field '{field}' at offset {offset}: {message}")]
    TruncatedField {
        field: String,
        offset: usize,
        message: String,
    },

    /// Identifier digits or a field name failed structural checks.
    #[error("invalid identifier at offset {offset}: {message}")]
    InvalidIdentifier { offset: usize, message: String },

    /// Format version other than V1.
    #[error("unsupported format version: {version}")]
    UnsupportedFormatVersion { version: FormatVersion },

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for VDF operations.
pub type Result<T> = std::result::Result<T, VdfError>;

impl VdfError {
    /// Create a MalformedHeader error.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a TruncatedField error.
    pub fn truncated_field(field: impl Into<String>, offset: usize, message: impl Into<String>) -> Self {
        Self::TruncatedField {
            field: field.into(),
            offset,
            message: message.into(),
        }
    }

    /// Create an InvalidIdentifier error.
    pub fn invalid_identifier(offset: usize, message: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            offset,
            message: message.into(),
        }
    }
}

/// A record that failed to parse, together with the fields read before the
/// failure.
#[derive(Debug, Error)]
#[error("record parse failed after {} field(s): {error}", .partial.len())]
pub struct RecordError {
    /// Fields accumulated before the error.
    pub partial: Record,
    /// The failure itself.
    #[source]
    pub error: VdfError,
}

impl RecordError {
    pub(crate) fn new(partial: Record, error: VdfError) -> Self {
        Self { partial, error }
    }
}

impl From<RecordError> for VdfError {
    fn from(err: RecordError) -> Self {
        err.error
    }
}
