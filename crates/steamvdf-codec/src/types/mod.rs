//! Core option types for VDF handling.
//!
//! Format version and reader options shared by the framer, the record parser
//! and the file-level reader.

mod options;

pub use options::{DEFAULT_FORMAT_NAME, FormatVersion, ListIndexMode, ReaderOptions};
