//! Property-based round-trip tests for shortcuts.

use proptest::prelude::*;
use steamvdf_codec::{Document, MAX_IDENTIFIER, ReaderOptions};
use steamvdf_shortcuts::{Shortcut, document_from_shortcuts, shortcuts_from_document};

// Text without NUL or 0x08 (0x08 followed by a terminator looks like a
// record delimiter)
fn text_strategy() -> impl Strategy<Value = String> {
    "[^\\x00\\x08]{0,16}"
}

// Paths may hold quotes of their own, including at either end
fn path_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 /._\"-]{0,24}"
}

fn timestamp_strategy() -> impl Strategy<Value = i32> {
    any::<i32>().prop_filter("delimiter byte", |n| !n.to_le_bytes().contains(&0x08))
}

fn shortcut_strategy() -> impl Strategy<Value = Shortcut> {
    (
        (
            0..=MAX_IDENTIFIER,
            text_strategy(),
            path_strategy(),
            path_strategy(),
            text_strategy(),
            text_strategy(),
            text_strategy(),
        ),
        (
            any::<[bool; 4]>(),
            timestamp_strategy(),
            prop::collection::vec(text_strategy(), 0..4),
        ),
    )
        .prop_map(
            |(
                (id, app_name, exe_path, start_dir, icon_path, shortcut_path, launch_options),
                ([is_hidden, allow_desktop_config, allow_overlay, is_open_vr], last_play_time, tags),
            )| Shortcut {
                id,
                app_name,
                exe_path,
                start_dir,
                icon_path,
                shortcut_path,
                launch_options,
                is_hidden,
                allow_desktop_config,
                allow_overlay,
                is_open_vr,
                last_play_time,
                tags,
            },
        )
}

#[test]
fn prop_shortcut_record_roundtrip() {
    proptest!(|(shortcut in shortcut_strategy())| {
        prop_assert_eq!(Shortcut::from_record(&shortcut.to_record()), shortcut);
    });
}

#[test]
fn prop_shortcuts_document_roundtrip() {
    proptest!(|(shortcuts in prop::collection::vec(shortcut_strategy(), 0..5))| {
        let bytes = document_from_shortcuts(&shortcuts).to_bytes().unwrap();
        let parsed = Document::parse(&bytes, &ReaderOptions::default()).unwrap();
        prop_assert_eq!(shortcuts_from_document(&parsed), shortcuts);

        // Parse, map, rebuild, serialize: a byte-identical no-op.
        let rebuilt = document_from_shortcuts(&shortcuts_from_document(&parsed));
        prop_assert_eq!(rebuilt.to_bytes().unwrap(), bytes);
    });
}
