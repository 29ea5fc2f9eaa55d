//! Reader options and format version.

/// Name tag used by the shortcuts collection.
pub const DEFAULT_FORMAT_NAME: &str = "shortcuts";

/// Binary VDF format version.
///
/// Only [`FormatVersion::V1`] is defined. Other values can be constructed so
/// callers get [`crate::VdfError::UnsupportedFormatVersion`] instead of a
/// silently misread stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatVersion(u32);

impl FormatVersion {
    /// Version 1: header `00 <name> 00 00`, delimiter `08 08 00`, footer `08 08 08 08`.
    pub const V1: Self = Self(1);

    /// Wrap a raw version number.
    #[must_use]
    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    /// Raw version number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether the codec can read and write this version.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        self.0 == Self::V1.0
    }
}

impl Default for FormatVersion {
    fn default() -> Self {
        Self::V1
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V{}", self.0)
    }
}

/// How list elements whose index does not match their position are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListIndexMode {
    /// Keep the elements read so far and drop the rest of the list.
    #[default]
    Lenient,
    /// Fail with `TruncatedField`.
    Strict,
}

/// Options for reading VDF streams.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Name tag expected in the header (default: `shortcuts`).
    pub name: String,
    /// Format version (default: V1).
    pub version: FormatVersion,
    /// List index mismatch handling (default: lenient).
    pub list_index_mode: ListIndexMode,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_FORMAT_NAME.to_string(),
            version: FormatVersion::V1,
            list_index_mode: ListIndexMode::Lenient,
        }
    }
}

impl ReaderOptions {
    /// Create reader options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected header name tag.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the format version.
    #[must_use]
    pub fn with_version(mut self, version: FormatVersion) -> Self {
        self.version = version;
        self
    }

    /// Reject lists whose element indices are out of sequence.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.list_index_mode = ListIndexMode::Strict;
        self
    }
}
