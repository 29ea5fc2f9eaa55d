//! In-memory document: ordered records plus format name and version.

use tracing::{debug, warn};

use crate::error::{RecordError, Result, VdfError};
use crate::frame::{assemble, split_records};
use crate::record::{MAX_IDENTIFIER, Record, parse_record};
use crate::types::{DEFAULT_FORMAT_NAME, FormatVersion, ReaderOptions};

/// A parsed or constructed VDF document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    version: FormatVersion,
    records: Vec<Record>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT_NAME)
    }
}

impl Document {
    /// Create an empty V1 document with the given name tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: FormatVersion::V1,
            records: Vec::new(),
        }
    }

    /// Set the format version.
    #[must_use]
    pub fn with_version(mut self, version: FormatVersion) -> Self {
        self.version = version;
        self
    }

    /// Replace all records.
    #[must_use]
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> FormatVersion {
        self.version
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse a complete stream, failing on the first bad record.
    pub fn parse(data: &[u8], options: &ReaderOptions) -> Result<Self> {
        let partial = Self::parse_partial(data, options)?;
        match partial.failure {
            Some(failure) => Err(failure.error),
            None => Ok(partial.document),
        }
    }

    /// Parse a stream, keeping the records read before the first bad one.
    ///
    /// Header, footer and version problems are still returned as `Err`
    /// because no record boundaries can be established without them.
    pub fn parse_partial(data: &[u8], options: &ReaderOptions) -> Result<PartialDocument> {
        check_version(options.version)?;
        let frames = split_records(data, &options.name)?;
        debug!(
            name = %options.name,
            records = frames.chunks.len(),
            bytes = data.len(),
            "framed document"
        );

        let mut document = Self::new(options.name.clone()).with_version(options.version);
        for (index, chunk) in frames.chunks.into_iter().enumerate() {
            match parse_record(chunk, options.list_index_mode) {
                Ok(record) => document.push(record),
                Err(RecordError { partial, error }) => {
                    warn!(index, error = %error, "failed to parse record");
                    return Ok(PartialDocument {
                        document,
                        failure: Some(RecordFailure {
                            index,
                            partial,
                            error,
                        }),
                    });
                }
            }
        }

        Ok(PartialDocument {
            document,
            failure: None,
        })
    }

    /// Serialize to a complete stream.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        check_version(self.version)?;
        check_identifiers(&self.records)?;
        Ok(assemble(&self.name, self.records.iter().map(Record::to_bytes)))
    }
}

/// Result of [`Document::parse_partial`].
#[derive(Debug)]
pub struct PartialDocument {
    /// Records parsed before any failure.
    pub document: Document,
    /// The first record that failed, if any.
    pub failure: Option<RecordFailure>,
}

impl PartialDocument {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// A record that could not be parsed.
#[derive(Debug)]
pub struct RecordFailure {
    /// Zero-based position of the record in the stream.
    pub index: usize,
    /// Fields read before the error.
    pub partial: Record,
    pub error: VdfError,
}

fn check_version(version: FormatVersion) -> Result<()> {
    if version.is_supported() {
        Ok(())
    } else {
        Err(VdfError::UnsupportedFormatVersion { version })
    }
}

/// Identifiers longer than the readable digit count would not parse back.
fn check_identifiers(records: &[Record]) -> Result<()> {
    match records
        .iter()
        .filter_map(Record::id)
        .find(|id| *id > MAX_IDENTIFIER)
    {
        Some(id) => Err(VdfError::invalid_identifier(
            0,
            format!("identifier {id} is larger than {MAX_IDENTIFIER}"),
        )),
        None => Ok(()),
    }
}
