//! Record serializer.
//!
//! Emits fields in the order they appear in the record without re-checking
//! names; a record built by the parser serializes to its original bytes.

use crate::cursor::NUL;
use crate::field::{
    Field, LIST_TAG, NUMBER_TAG, TEXT_TAG, encode_identifier, encode_list, encode_number,
    encode_text,
};
use crate::record::Record;

/// Append every field of `record` to `out`.
pub fn encode_record(record: &Record, out: &mut Vec<u8>) {
    for field in record {
        encode_field(field, out);
    }
}

/// Append one field: tag, name, NUL and value (identifier: digits and NUL).
pub fn encode_field(field: &Field, out: &mut Vec<u8>) {
    match field {
        Field::Identifier(id) => encode_identifier(*id, out),
        Field::Text { name, value } => {
            write_header(TEXT_TAG, name, out);
            encode_text(value, out);
        }
        Field::Number { name, value } => {
            write_header(NUMBER_TAG, name, out);
            encode_number(*value, out);
        }
        Field::List { name, items } => {
            // The name's terminator is the leading NUL of the first element,
            // or the closing NUL of an empty list.
            out.push(LIST_TAG);
            out.extend_from_slice(name.as_bytes());
            encode_list(items, out);
        }
    }
}

fn write_header(tag: u8, name: &str, out: &mut Vec<u8>) {
    out.push(tag);
    out.extend_from_slice(name.as_bytes());
    out.push(NUL);
}
