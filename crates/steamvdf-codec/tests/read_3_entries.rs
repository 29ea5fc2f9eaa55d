//! Test for reading the 3-entries.vdf test data file.
//!
//! The file holds three shortcut records written by Steam's field layout,
//! and must read back field-for-field and re-serialize byte-for-byte.

use std::path::Path;

use sha2::{Digest, Sha256};
use steamvdf_codec::{Document, Field, ReaderOptions, VdfReader, read_vdf, read_vdf_with_options};

/// Path to the test data file
fn three_entries_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/3-entries.vdf"))
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[test]
fn test_read_3_entries_exists() {
    let path = three_entries_path();
    assert!(path.exists(), "Test file not found: {}", path.display());
}

#[test]
fn test_read_3_entries_identifiers() {
    let doc = read_vdf(three_entries_path()).expect("Failed to read 3-entries.vdf");

    assert_eq!(doc.name(), "shortcuts");
    let ids: Vec<_> = doc.records().iter().map(|r| r.id()).collect();
    assert_eq!(ids, [Some(0), Some(1), Some(2)]);
}

#[test]
fn test_read_3_entries_field_order() {
    let doc = read_vdf(three_entries_path()).expect("Failed to read 3-entries.vdf");

    let expected = [
        "AppName",
        "Exe",
        "StartDir",
        "icon",
        "ShortcutPath",
        "LaunchOptions",
        "IsHidden",
        "AllowDesktopConfig",
        "AllowOverlay",
        "OpenVR",
        "LastPlayTime",
        "tags",
    ];
    for record in doc.records() {
        let names: Vec<_> = record.iter().filter_map(Field::name).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_read_3_entries_values() {
    let doc = read_vdf(three_entries_path()).expect("Failed to read 3-entries.vdf");
    let records = doc.records();

    let chess = &records[0];
    assert_eq!(chess.get("AppName").unwrap().as_text().unwrap(), "Chess");
    assert_eq!(
        chess.get("Exe").unwrap().as_text().unwrap(),
        "\"/Applications/Chess.app\""
    );
    assert_eq!(chess.get("AllowOverlay").and_then(Field::as_bool), Some(true));
    assert!(chess.get("tags").and_then(Field::as_list).unwrap().is_empty());

    let woah = &records[1];
    assert_eq!(
        woah.get("LaunchOptions").unwrap().as_text().unwrap(),
        "-one -two \"-three and some\""
    );
    assert_eq!(woah.get("IsHidden").and_then(Field::as_bool), Some(true));
    assert_eq!(
        woah.get("LastPlayTime").and_then(Field::as_number),
        Some(1_538_448_950)
    );
    assert_eq!(
        woah.get("tags").and_then(Field::as_list).unwrap(),
        ["cool", "story"]
    );

    let another = &records[2];
    assert_eq!(
        another.get("AppName").unwrap().as_text().unwrap(),
        "Another Cool app"
    );
    assert_eq!(another.get("OpenVR").and_then(Field::as_bool), Some(true));
    assert_eq!(
        another.get("tags").and_then(Field::as_list).unwrap(),
        ["junk", "eee"]
    );
}

#[test]
fn test_read_3_entries_reserializes_identically() {
    let original = std::fs::read(three_entries_path()).expect("Failed to read bytes");
    let doc = Document::parse(&original, &ReaderOptions::default()).unwrap();
    let written = doc.to_bytes().unwrap();

    assert_eq!(sha256_hex(&written), sha256_hex(&original));
}

#[test]
fn test_read_3_entries_strict_mode() {
    let strict = VdfReader::open_with_options(three_entries_path(), ReaderOptions::new().strict())
        .unwrap()
        .read_document()
        .unwrap();
    let lenient = read_vdf(three_entries_path()).unwrap();
    assert_eq!(strict, lenient);
}

#[test]
fn test_read_truncated_copy_fails_on_footer() {
    let original = std::fs::read(three_entries_path()).unwrap();
    let truncated = &original[..original.len() - 4];
    let result = VdfReader::new(truncated).read_document();
    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("footer"));
}

#[test]
fn test_read_3_entries_with_options() {
    let lenient = read_vdf(three_entries_path()).expect("Failed to read 3-entries.vdf");
    let strict = read_vdf_with_options(three_entries_path(), ReaderOptions::new().strict())
        .expect("Failed to read 3-entries.vdf strictly");
    assert_eq!(strict.len(), 3);
    assert_eq!(strict, lenient);

    let renamed = ReaderOptions::new().with_name("screenshots");
    assert!(read_vdf_with_options(three_entries_path(), renamed).is_err());
}
