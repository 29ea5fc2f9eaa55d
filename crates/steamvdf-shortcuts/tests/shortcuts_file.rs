//! Reading the shared 3-entries.vdf fixture as shortcuts.

use std::fs::File;
use std::path::Path;

use sha2::{Digest, Sha256};
use steamvdf_shortcuts::{Shortcut, read_shortcuts, read_shortcuts_from, write_shortcuts};

fn three_entries_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../steamvdf-codec/tests/data/3-entries.vdf"
    ))
}

fn expected() -> Vec<Shortcut> {
    vec![
        Shortcut {
            id: 0,
            app_name: "Chess".to_string(),
            exe_path: "/Applications/Chess.app".to_string(),
            start_dir: "/Applications".to_string(),
            allow_desktop_config: true,
            allow_overlay: true,
            ..Shortcut::default()
        },
        Shortcut {
            id: 1,
            app_name: "woah".to_string(),
            exe_path: "/path/to/something".to_string(),
            start_dir: "/path/to".to_string(),
            icon_path: "/icon.png".to_string(),
            launch_options: "-one -two \"-three and some\"".to_string(),
            is_hidden: true,
            allow_desktop_config: true,
            last_play_time: 1_538_448_950,
            tags: vec!["cool".to_string(), "story".to_string()],
            ..Shortcut::default()
        },
        Shortcut {
            id: 2,
            app_name: "Another Cool app".to_string(),
            exe_path: "/what/to/my other cool app".to_string(),
            start_dir: "/what/to".to_string(),
            shortcut_path: "/shortcut".to_string(),
            launch_options: "-zero -two \"-three and some\"".to_string(),
            allow_desktop_config: true,
            allow_overlay: true,
            is_open_vr: true,
            last_play_time: 1_538_448_951,
            tags: vec!["junk".to_string(), "eee".to_string()],
            ..Shortcut::default()
        },
    ]
}

#[test]
fn test_read_3_entries() {
    let shortcuts = read_shortcuts(three_entries_path()).expect("Failed to read 3-entries.vdf");
    assert_eq!(shortcuts, expected());
}

#[test]
fn test_read_from_open_file() {
    let file = File::open(three_entries_path()).unwrap();
    let shortcuts = read_shortcuts_from(file).unwrap();
    assert_eq!(shortcuts.len(), 3);
    assert_eq!(shortcuts[2].app_name, "Another Cool app");
}

#[test]
fn test_rewrite_is_byte_identical() {
    let original = std::fs::read(three_entries_path()).unwrap();
    let shortcuts = read_shortcuts_from(original.as_slice()).unwrap();

    let mut written = Vec::new();
    write_shortcuts(&shortcuts, &mut written).unwrap();

    assert_eq!(
        hex::encode(Sha256::digest(&written)),
        hex::encode(Sha256::digest(&original))
    );
}

#[test]
fn test_expected_shortcuts_encode_to_fixture() {
    let original = std::fs::read(three_entries_path()).unwrap();
    let mut written = Vec::new();
    write_shortcuts(&expected(), &mut written).unwrap();
    assert_eq!(written, original);
}
