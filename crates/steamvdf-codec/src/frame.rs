//! Stream framing: header, record delimiter and footer.
//!
//! # Structure
//!
//! ```text
//! 00 <name> 00 00 | record | 08 08 00 | record | ... | record | 08 08 08 08
//! ```
//!
//! Framing searches the remaining bytes for the delimiter first and only
//! falls back to the footer when no delimiter is left. Records are not
//! escaped, so a delimiter-shaped run inside a record (for example in a
//! number value) splits it; real files have not been seen to do this.

use tracing::debug;

use crate::error::{Result, VdfError};

/// Separator between consecutive records.
pub const RECORD_DELIMITER: [u8; 3] = [0x08, 0x08, 0x00];

/// End of the document.
pub const FOOTER: [u8; 4] = [0x08, 0x08, 0x08, 0x08];

/// Build the header for a format name: `00 <name> 00 00`.
#[must_use]
pub fn build_header(name: &str) -> Vec<u8> {
    let mut header = Vec::with_capacity(name.len() + 3);
    header.push(0x00);
    header.extend_from_slice(name.as_bytes());
    header.extend_from_slice(&[0x00, 0x00]);
    header
}

/// Check that `data` starts with the header for `name`.
///
/// # Returns
/// The header length on success.
pub fn validate_header(data: &[u8], name: &str) -> Result<usize> {
    let header = build_header(name);
    if data.starts_with(&header) {
        return Ok(header.len());
    }

    match found_name(data) {
        Some(found) if found != name => Err(VdfError::malformed_header(format!(
            "expected name tag '{name}', found '{found}'"
        ))),
        _ => Err(VdfError::malformed_header(format!(
            "stream does not start with the '{name}' header"
        ))),
    }
}

/// Name tag of a header-shaped prefix, for error messages.
fn found_name(data: &[u8]) -> Option<String> {
    let (&first, rest) = data.split_first()?;
    if first != 0x00 {
        return None;
    }
    let end = rest.iter().position(|&b| b == 0x00)?;
    Some(String::from_utf8_lossy(&rest[..end]).into_owned())
}

/// Record chunks of a framed stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frames<'a> {
    /// Raw bytes of each record, in stream order.
    pub chunks: Vec<&'a [u8]>,
    /// Bytes after the footer, which are ignored.
    pub trailing: usize,
}

/// Split a stream into record chunks.
///
/// A zero-length chunk directly before the footer (a document with no
/// records) yields no chunk.
pub fn split_records<'a>(data: &'a [u8], name: &str) -> Result<Frames<'a>> {
    let mut rest = &data[validate_header(data, name)?..];
    let mut chunks = Vec::new();

    loop {
        if let Some(idx) = find(rest, &RECORD_DELIMITER) {
            chunks.push(&rest[..idx]);
            rest = &rest[idx + RECORD_DELIMITER.len()..];
            continue;
        }

        let idx = find(rest, &FOOTER)
            .ok_or_else(|| VdfError::malformed_header("stream has no footer"))?;
        if idx > 0 {
            chunks.push(&rest[..idx]);
        }
        let trailing = rest.len() - idx - FOOTER.len();
        if trailing > 0 {
            debug!(trailing, "ignoring bytes after footer");
        }
        return Ok(Frames { chunks, trailing });
    }
}

/// Assemble record bytes into a complete stream.
#[must_use]
pub fn assemble<I, C>(name: &str, chunks: I) -> Vec<u8>
where
    I: IntoIterator<Item = C>,
    C: AsRef<[u8]>,
{
    let mut out = build_header(name);
    for (idx, chunk) in chunks.into_iter().enumerate() {
        if idx > 0 {
            out.extend_from_slice(&RECORD_DELIMITER);
        }
        out.extend_from_slice(chunk.as_ref());
    }
    out.extend_from_slice(&FOOTER);
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
