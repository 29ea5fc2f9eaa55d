//! VDF file reader.
//!
//! Reads a whole stream into memory and hands it to [`Document::parse`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::document::{Document, PartialDocument};
use crate::error::{Result, VdfError};
use crate::types::ReaderOptions;

/// VDF stream reader.
pub struct VdfReader<R: Read> {
    reader: BufReader<R>,
    options: ReaderOptions,
}

impl<R: Read> VdfReader<R> {
    /// Create a new reader with default options.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            options: ReaderOptions::default(),
        }
    }

    /// Create a new reader with options.
    pub fn with_options(reader: R, options: ReaderOptions) -> Self {
        Self {
            reader: BufReader::new(reader),
            options,
        }
    }

    /// Read and parse the entire stream, failing on the first bad record.
    pub fn read_document(mut self) -> Result<Document> {
        let data = self.read_all_bytes()?;
        Document::parse(&data, &self.options)
    }

    /// Read the entire stream, keeping records read before a bad one.
    pub fn read_document_partial(mut self) -> Result<PartialDocument> {
        let data = self.read_all_bytes()?;
        Document::parse_partial(&data, &self.options)
    }

    fn read_all_bytes(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        debug!(bytes = data.len(), "read stream");
        Ok(data)
    }
}

impl VdfReader<File> {
    /// Open a VDF file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(open_file(path)?))
    }

    /// Open a VDF file with options.
    pub fn open_with_options(path: &Path, options: ReaderOptions) -> Result<Self> {
        Ok(Self::with_options(open_file(path)?, options))
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VdfError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VdfError::Io(e)
        }
    })
}

/// Read a VDF file from a path.
pub fn read_vdf(path: &Path) -> Result<Document> {
    VdfReader::open(path)?.read_document()
}

/// Read a VDF file with options.
pub fn read_vdf_with_options(path: &Path, options: ReaderOptions) -> Result<Document> {
    VdfReader::open_with_options(path, options)?.read_document()
}
