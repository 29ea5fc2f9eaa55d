//! Property-based round-trip tests for records and documents.
//!
//! Generated text never contains NUL (the terminator) or 0x08, and numbers
//! never contain a 0x08 byte, so no record can embed a delimiter-shaped run.

use proptest::prelude::*;
use sha2::{Digest, Sha256};
use steamvdf_codec::{
    Document, Field, ListIndexMode, MAX_IDENTIFIER, ReaderOptions, Record, parse_record,
};

// Strategy for field names: ASCII letter then alphanumerics
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,12}"
}

// Strategy for raw text bytes
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        any::<u8>().prop_filter("terminator or delimiter byte", |b| *b != 0x00 && *b != 0x08),
        0..24,
    )
}

// Strategy for numbers without 0x08 bytes
fn number_strategy() -> impl Strategy<Value = i32> {
    any::<i32>().prop_filter("delimiter byte", |n| !n.to_le_bytes().contains(&0x08))
}

fn field_strategy() -> impl Strategy<Value = Field> {
    prop_oneof![
        (name_strategy(), text_strategy()).prop_map(|(name, value)| Field::Text { name, value }),
        (name_strategy(), number_strategy()).prop_map(|(name, value)| Field::Number { name, value }),
        (name_strategy(), prop::collection::vec(text_strategy(), 0..5))
            .prop_map(|(name, items)| Field::List { name, items }),
    ]
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (0..=MAX_IDENTIFIER, prop::collection::vec(field_strategy(), 0..8)).prop_map(|(id, fields)| {
        let mut record = Record::new(id);
        for field in fields {
            record.push(field);
        }
        record
    })
}

#[test]
fn prop_record_roundtrip() {
    proptest!(|(record in record_strategy())| {
        let bytes = record.to_bytes();
        let parsed = parse_record(&bytes, ListIndexMode::Strict).unwrap();
        prop_assert_eq!(&parsed, &record);
        prop_assert_eq!(parsed.to_bytes(), bytes);
    });
}

#[test]
fn prop_document_roundtrip_is_byte_identical() {
    proptest!(|(records in prop::collection::vec(record_strategy(), 0..6))| {
        let doc = Document::default().with_records(records);
        let bytes = doc.to_bytes().unwrap();

        let parsed = Document::parse(&bytes, &ReaderOptions::default()).unwrap();
        prop_assert_eq!(parsed.records(), doc.records());

        let rewritten = parsed.to_bytes().unwrap();
        prop_assert_eq!(
            hex::encode(Sha256::digest(&rewritten)),
            hex::encode(Sha256::digest(&bytes))
        );
    });
}

#[test]
fn prop_parse_never_panics() {
    proptest!(|(data in prop::collection::vec(any::<u8>(), 0..256))| {
        let _ = parse_record(&data, ListIndexMode::Lenient);
        let _ = Document::parse_partial(&data, &ReaderOptions::default());
    });
}

#[test]
fn test_bool_encoding() {
    let record = Record::new(0)
        .with_bool("IsHidden", true)
        .with_bool("AllowOverlay", false);
    let bytes = record.to_bytes();
    assert_eq!(
        bytes,
        b"0\0\x02IsHidden\0\x01\0\0\0\x02AllowOverlay\0\0\0\0\0".as_slice()
    );
}

#[test]
fn test_list_encoding_in_record() {
    let record = Record::new(0).with_list("tags", ["junk", "eee"]);
    let bytes = record.to_bytes();
    assert_eq!(
        bytes,
        b"0\0\0tags\0\0\x01\x30\0junk\0\x01\x31\0eee\0".as_slice()
    );

    let parsed = parse_record(&bytes, ListIndexMode::Lenient).unwrap();
    assert_eq!(
        parsed.get("tags").and_then(Field::as_list).unwrap(),
        ["junk", "eee"]
    );
}

#[test]
fn test_lenient_list_drops_out_of_sequence_elements() {
    // Second element claims index 5.
    let data = b"0\0\0tags\0\x010\0a\0\x015\0b\0\x02N\0\x07\0\0\0";
    let record = parse_record(data, ListIndexMode::Lenient).unwrap();
    assert_eq!(record.get("tags").and_then(Field::as_list).unwrap(), ["a"]);
    assert_eq!(record.get("N").and_then(Field::as_number), Some(7));

    assert!(parse_record(data, ListIndexMode::Strict).is_err());
}
