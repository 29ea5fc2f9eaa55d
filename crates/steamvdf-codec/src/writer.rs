//! VDF file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::document::Document;
use crate::error::Result;

/// VDF stream writer.
pub struct VdfWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> VdfWriter<W> {
    /// Create a new writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Serialize and write a document, then flush.
    pub fn write_document(mut self, document: &Document) -> Result<()> {
        let bytes = document.to_bytes()?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        debug!(
            records = document.len(),
            bytes = bytes.len(),
            "wrote document"
        );
        Ok(())
    }
}

impl VdfWriter<File> {
    /// Create (or truncate) a file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

/// Write a document to a path.
pub fn write_vdf(path: &Path, document: &Document) -> Result<()> {
    VdfWriter::create(path)?.write_document(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormatVersion;

    #[test]
    fn test_write_to_vec() {
        let mut out = Vec::new();
        VdfWriter::new(&mut out)
            .write_document(&Document::default())
            .unwrap();
        assert_eq!(out, b"\0shortcuts\0\0\x08\x08\x08\x08");
    }

    #[test]
    fn test_write_rejects_unsupported_version() {
        let mut out = Vec::new();
        let doc = Document::default().with_version(FormatVersion::new(3));
        assert!(VdfWriter::new(&mut out).write_document(&doc).is_err());
        assert!(out.is_empty());
    }
}
