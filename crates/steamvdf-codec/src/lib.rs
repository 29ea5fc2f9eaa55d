//! Binary VDF record format reader and writer.
//!
//! This crate reads and writes the control-byte-delimited binary format Steam
//! uses for `shortcuts.vdf`: a named header, records separated by a fixed
//! delimiter, and a footer. Records are flat ordered lists of text, number
//! and list fields behind a numeric identifier.
//!
//! # Features
//!
//! - Byte-exact round trips: parsing then serializing reproduces the input
//! - Partial results: a failed record still yields the fields read before it
//! - Configurable handling of out-of-sequence list indices
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use steamvdf_codec::{Document, Record, read_vdf, write_vdf};
//!
//! let doc = read_vdf(Path::new("shortcuts.vdf")).unwrap();
//! println!("{} records", doc.len());
//!
//! let mut out = Document::new("shortcuts");
//! out.push(
//!     Record::new(0)
//!         .with_text("AppName", "Chess")
//!         .with_bool("IsHidden", false)
//!         .with_list("tags", ["games"]),
//! );
//! write_vdf(Path::new("shortcuts_out.vdf"), &out).unwrap();
//! ```
//!
//! # Bytes
//!
//! ```
//! use steamvdf_codec::{Document, ReaderOptions, Record};
//!
//! let doc = Document::default().with_records(vec![Record::new(0).with_bool("IsHidden", true)]);
//! let bytes = doc.to_bytes().unwrap();
//! assert!(bytes.starts_with(b"\0shortcuts\0\0"));
//! assert!(bytes.ends_with(b"\x08\x08\x08\x08"));
//!
//! let parsed = Document::parse(&bytes, &ReaderOptions::default()).unwrap();
//! assert_eq!(parsed, doc);
//! ```

pub mod cursor;
mod document;
mod error;
pub mod field;
pub mod frame;
pub mod record;
mod reader;
mod types;
mod writer;

// Re-export error types
pub use error::{RecordError, Result, VdfError};

// Re-export core types
pub use document::{Document, PartialDocument, RecordFailure};
pub use field::{Field, FieldType};
pub use record::{MAX_IDENTIFIER, Record, parse_record};
pub use types::{DEFAULT_FORMAT_NAME, FormatVersion, ListIndexMode, ReaderOptions};

// Re-export reader functionality
pub use reader::{VdfReader, read_vdf, read_vdf_with_options};

// Re-export writer functionality
pub use writer::{VdfWriter, write_vdf};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
