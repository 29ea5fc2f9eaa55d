//! Field values and their byte-level codec.
//!
//! # Layout
//!
//! | Kind       | Bytes                                                          |
//! |------------|----------------------------------------------------------------|
//! | Identifier | ASCII digits + `00`                                            |
//! | Text       | `01` + name + `00` + text + `00`                               |
//! | Number     | `02` + name + `00` + 4 bytes little-endian `i32`               |
//! | List       | `00` + name + (`00 01` + decimal index + `00` + text)* + `00`  |
//!
//! The NUL that closes a list's name doubles as the leading NUL of the first
//! element, and each element's text is closed by the leading NUL of the next
//! element (or by the list's final NUL).

use std::borrow::Cow;

use tracing::debug;

use crate::cursor::{Cursor, NUL};
use crate::error::{Result, VdfError};
use crate::types::ListIndexMode;

/// Type tag for list fields.
pub const LIST_TAG: u8 = 0x00;
/// Type tag for text fields (also marks each list element).
pub const TEXT_TAG: u8 = 0x01;
/// Type tag for 32-bit number and boolean fields.
pub const NUMBER_TAG: u8 = 0x02;

/// Width of a number value in bytes.
pub const NUMBER_LEN: usize = 4;

/// Decoded kind of a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    List,
}

impl FieldType {
    /// Map a type tag byte. `None` for anything but `00`, `01`, `02`.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            TEXT_TAG => Some(Self::Text),
            NUMBER_TAG => Some(Self::Number),
            LIST_TAG => Some(Self::List),
            _ => None,
        }
    }

    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Text => TEXT_TAG,
            Self::Number => NUMBER_TAG,
            Self::List => LIST_TAG,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::List => write!(f, "list"),
        }
    }
}

/// One field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Unnamed record identifier, always first in a record.
    Identifier(u64),
    /// NUL-terminated byte string.
    Text { name: String, value: Vec<u8> },
    /// Signed 32-bit integer; booleans are stored as 0 or 1.
    Number { name: String, value: i32 },
    /// Ordered text elements.
    List { name: String, items: Vec<Vec<u8>> },
}

impl Field {
    /// Create a text field.
    pub fn text(name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a number field.
    pub fn number(name: impl Into<String>, value: i32) -> Self {
        Self::Number {
            name: name.into(),
            value,
        }
    }

    /// Create a boolean field (a number field holding 0 or 1).
    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::number(name, i32::from(value))
    }

    /// Create a list field.
    pub fn list<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Self::List {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Field name; `None` for the identifier.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Identifier(_) => None,
            Self::Text { name, .. } | Self::Number { name, .. } | Self::List { name, .. } => {
                Some(name)
            }
        }
    }

    /// Field type; `None` for the identifier.
    #[must_use]
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Self::Identifier(_) => None,
            Self::Text { .. } => Some(FieldType::Text),
            Self::Number { .. } => Some(FieldType::Number),
            Self::List { .. } => Some(FieldType::List),
        }
    }

    /// Text value as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text { value, .. } => Some(String::from_utf8_lossy(value)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Self::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Number value read as a boolean.
    ///
    /// Any non-zero value is `true`, so a flag stored as `2` is written back
    /// as `1` once it has been through a `bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_number().map(|value| value != 0)
    }

    /// List elements as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn as_list(&self) -> Option<Vec<Cow<'_, str>>> {
        match self {
            Self::List { items, .. } => {
                Some(items.iter().map(|item| String::from_utf8_lossy(item)).collect())
            }
            _ => None,
        }
    }

    /// Build an owned field from a decoded value.
    pub(crate) fn from_value(name: String, value: Value<'_>) -> Self {
        match value {
            Value::Text(text) => Self::Text {
                name,
                value: text.to_vec(),
            },
            Value::Number(value) => Self::Number { name, value },
            Value::List(items) => Self::List {
                name,
                items: items.into_iter().map(<[u8]>::to_vec).collect(),
            },
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(id) => write!(f, "#{id}"),
            Self::Text { name, value } => {
                write!(f, "{name} = {:?}", String::from_utf8_lossy(value))
            }
            Self::Number { name, value } => write!(f, "{name} = {value}"),
            Self::List { name, items } => {
                write!(f, "{name} = [")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", String::from_utf8_lossy(item))?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A decoded value borrowing from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    Text(&'a [u8]),
    Number(i32),
    List(Vec<&'a [u8]>),
}

/// Decode one value of the given type from the start of `input`.
///
/// Returns the value and the number of bytes consumed, terminators included.
/// `field` names the value in error messages.
pub fn decode_value<'a>(
    input: &'a [u8],
    field_type: FieldType,
    mode: ListIndexMode,
    field: &str,
) -> Result<(Value<'a>, usize)> {
    let (value, next) = read_value(Cursor::new(input), field_type, mode, field)?;
    Ok((value, next.position()))
}

/// Cursor-threaded form of [`decode_value`] used by the record parser.
pub(crate) fn read_value<'a>(
    cursor: Cursor<'a>,
    field_type: FieldType,
    mode: ListIndexMode,
    field: &str,
) -> Result<(Value<'a>, Cursor<'a>)> {
    match field_type {
        FieldType::Text => {
            let (text, next) = cursor.take_until_nul().ok_or_else(|| {
                VdfError::truncated_field(field, cursor.position(), "text value is not terminated")
            })?;
            Ok((Value::Text(text), next))
        }
        FieldType::Number => {
            let (bytes, next) = cursor.take(NUMBER_LEN).ok_or_else(|| {
                VdfError::truncated_field(
                    field,
                    cursor.position(),
                    format!(
                        "expected {NUMBER_LEN} bytes, found {}",
                        cursor.remaining().len()
                    ),
                )
            })?;
            Ok((Value::Number(decode_number(bytes)), next))
        }
        FieldType::List => read_list(cursor, mode, field),
    }
}

/// Read list elements following the list's name terminator.
fn read_list<'a>(
    mut cursor: Cursor<'a>,
    mode: ListIndexMode,
    field: &str,
) -> Result<(Value<'a>, Cursor<'a>)> {
    let mut items = Vec::new();
    let mut dropping = false;

    while let Some((index, after_index)) = read_element_index(cursor) {
        let (text, next) = after_index.take_until_nul_or_end();
        if !dropping {
            if index == Some(items.len()) {
                items.push(text);
            } else {
                match mode {
                    ListIndexMode::Strict => {
                        return Err(VdfError::truncated_field(
                            field,
                            cursor.position(),
                            format!(
                                "list element index {} does not match position {}",
                                describe_index(index),
                                items.len()
                            ),
                        ));
                    }
                    ListIndexMode::Lenient => {
                        debug!(
                            field,
                            position = items.len(),
                            index = %describe_index(index),
                            "list index out of sequence, dropping remaining elements"
                        );
                        dropping = true;
                    }
                }
            }
        }
        cursor = next;
    }

    Ok((Value::List(items), cursor))
}

/// Match `01 <digits> 00` at the cursor.
///
/// The outer `Option` is `None` when the bytes are not an element header.
/// The inner index is `None` when the digits do not fit `usize`.
fn read_element_index(cursor: Cursor<'_>) -> Option<(Option<usize>, Cursor<'_>)> {
    let (tag, after_tag) = cursor.take_byte()?;
    if tag != TEXT_TAG {
        return None;
    }
    let (digits, after_digits) = after_tag.take_while(|b| b.is_ascii_digit());
    if digits.is_empty() || after_digits.peek() != Some(NUL) {
        return None;
    }
    let (_, after_nul) = after_digits.take_byte()?;
    let index = std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<usize>().ok());
    Some((index, after_nul))
}

fn describe_index(index: Option<usize>) -> String {
    index.map_or_else(|| "<overflow>".to_string(), |i| i.to_string())
}

/// Decode a little-endian `i32`. `bytes` must hold exactly four bytes.
fn decode_number(bytes: &[u8]) -> i32 {
    let mut buf = [0u8; NUMBER_LEN];
    buf.copy_from_slice(bytes);
    i32::from_le_bytes(buf)
}

/// Append an identifier: ASCII digits and a NUL.
pub fn encode_identifier(id: u64, out: &mut Vec<u8>) {
    out.extend_from_slice(id.to_string().as_bytes());
    out.push(NUL);
}

/// Append a text value and its NUL terminator.
pub fn encode_text(value: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(value);
    out.push(NUL);
}

/// Append a number value as four little-endian bytes.
pub fn encode_number(value: i32, out: &mut Vec<u8>) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Append list elements and the closing NUL.
///
/// The caller has already written the list tag and the name (without its
/// terminator).
pub fn encode_list<S: AsRef<[u8]>>(items: &[S], out: &mut Vec<u8>) {
    for (index, item) in items.iter().enumerate() {
        out.push(NUL);
        out.push(TEXT_TAG);
        out.extend_from_slice(index.to_string().as_bytes());
        out.push(NUL);
        out.extend_from_slice(item.as_ref());
    }
    out.push(NUL);
}
