//! Record parser.
//!
//! A record is read in a fixed sequence of states:
//!
//! 1. identifier: ASCII digits and a NUL (once)
//! 2. type tag: one byte
//! 3. field name: bytes up to a NUL; a name with no NUL ends the record
//! 4. value, dispatched on the type tag
//!
//! Steps 2-4 repeat until the input is exhausted. The record has no end
//! marker of its own; its extent is set by the stream framer.

use tracing::trace;

use crate::cursor::{Cursor, NUL};
use crate::error::{RecordError, Result, VdfError};
use crate::field::{Field, FieldType, read_value};
use crate::record::Record;
use crate::types::ListIndexMode;

/// Longest accepted identifier, in digits.
pub const MAX_IDENTIFIER_DIGITS: usize = 10;

/// Largest identifier that fits in [`MAX_IDENTIFIER_DIGITS`] digits.
pub const MAX_IDENTIFIER: u64 = 9_999_999_999;

/// Outcome of reading one named field.
enum Step<'a> {
    Field(Field, Cursor<'a>),
    End,
}

/// Parse one record's bytes.
///
/// On failure the fields read so far are returned inside the error.
pub fn parse_record(data: &[u8], mode: ListIndexMode) -> std::result::Result<Record, RecordError> {
    let mut record = Record::default();

    let (id, mut cursor) = match parse_identifier(Cursor::new(data)) {
        Ok(found) => found,
        Err(error) => return Err(RecordError::new(record, error)),
    };
    record.push(Field::Identifier(id));

    while !cursor.is_empty() {
        match parse_field(cursor, mode) {
            Ok(Step::Field(field, next)) => {
                trace!(id, field = %field, "parsed field");
                record.push(field);
                cursor = next;
            }
            Ok(Step::End) => break,
            Err(error) => return Err(RecordError::new(record, error)),
        }
    }

    Ok(record)
}

/// Read the identifier digits and their NUL.
///
/// Identifiers are written without leading zeros, so a multi-digit run
/// starting with `0` is rejected rather than re-serialized differently.
fn parse_identifier(cursor: Cursor<'_>) -> Result<(u64, Cursor<'_>)> {
    let start = cursor.position();
    let (digits, after_digits) = cursor.take_while(|b| b.is_ascii_digit());

    if digits.is_empty() {
        return Err(VdfError::invalid_identifier(
            start,
            "record does not start with an identifier",
        ));
    }
    if digits.len() > MAX_IDENTIFIER_DIGITS {
        return Err(VdfError::invalid_identifier(
            start,
            format!("identifier is longer than {MAX_IDENTIFIER_DIGITS} digits"),
        ));
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(VdfError::invalid_identifier(
            start,
            "identifier has a leading zero",
        ));
    }

    let after_nul = match after_digits.take_byte() {
        Some((NUL, next)) => next,
        _ => {
            return Err(VdfError::invalid_identifier(
                after_digits.position(),
                "identifier is not followed by a NUL terminator",
            ));
        }
    };

    let id = std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .ok_or_else(|| VdfError::invalid_identifier(start, "identifier is not a number"))?;

    Ok((id, after_nul))
}

/// Read type tag, name and value of the next field.
fn parse_field(cursor: Cursor<'_>, mode: ListIndexMode) -> Result<Step<'_>> {
    let tag_offset = cursor.position();
    let Some((tag, after_tag)) = cursor.take_byte() else {
        return Ok(Step::End);
    };
    let field_type = FieldType::from_tag(tag).ok_or(VdfError::UnknownFieldType {
        tag,
        offset: tag_offset,
    })?;

    let Some((name, after_name)) = parse_field_name(after_tag)? else {
        return Ok(Step::End);
    };

    let (value, next) = read_value(after_name, field_type, mode, &name)?;
    Ok(Step::Field(Field::from_value(name, value), next))
}

/// Read a field name and its NUL.
///
/// `Ok(None)` when no NUL remains: a dangling name marks the end of the
/// record.
fn parse_field_name(cursor: Cursor<'_>) -> Result<Option<(String, Cursor<'_>)>> {
    let offset = cursor.position();
    let Some((raw, next)) = cursor.take_until_nul() else {
        return Ok(None);
    };

    match raw.first() {
        None => return Err(VdfError::invalid_identifier(offset, "field name is empty")),
        Some(first) if !first.is_ascii_alphabetic() => {
            return Err(VdfError::invalid_identifier(
                offset,
                format!("field name does not start with a letter (0x{first:02x})"),
            ));
        }
        Some(_) => {}
    }

    let name = String::from_utf8(raw.to_vec())
        .map_err(|_| VdfError::invalid_identifier(offset, "field name is not valid UTF-8"))?;
    Ok(Some((name, next)))
}
