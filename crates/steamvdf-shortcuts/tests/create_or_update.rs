//! File store tests on temporary files.

use std::path::Path;

use steamvdf_shortcuts::{
    Change, CreateOrUpdateConfig, Lookup, Shortcut, ShortcutError, UpdateOutcome,
    create_or_update, read_shortcuts, write_shortcuts,
};
use tempfile::TempDir;

fn seed(path: &Path, names: &[&str]) {
    let shortcuts: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(id, name)| Shortcut {
            id: id as u64,
            exe_path: format!("/games/{name}"),
            ..Shortcut::new(*name)
        })
        .collect();
    let file = std::fs::File::create(path).unwrap();
    write_shortcuts(&shortcuts, file).unwrap();
}

fn insert_or_touch(name: &str, lookup: Lookup<'_>) -> Change {
    match lookup {
        Lookup::Found(existing) => Change::Replace(Shortcut {
            launch_options: "-touched".to_string(),
            ..existing.clone()
        }),
        Lookup::NotFound => Change::Insert(Shortcut {
            exe_path: format!("/games/{name}"),
            ..Shortcut::new(name)
        }),
    }
}

#[test]
fn test_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");

    let config = CreateOrUpdateConfig::new(&path, "Chess");
    let outcome = create_or_update(&config, insert_or_touch).unwrap();

    assert_eq!(outcome, UpdateOutcome::CreatedNewFile);
    let shortcuts = read_shortcuts(&path).unwrap();
    assert_eq!(shortcuts.len(), 1);
    assert_eq!(shortcuts[0].id, 0);
    assert_eq!(shortcuts[0].exe_path, "/games/Chess");
}

#[cfg(unix)]
#[test]
fn test_new_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");
    let config = CreateOrUpdateConfig::new(&path, "Chess").with_mode(0o600);
    create_or_update(&config, insert_or_touch).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_skip_does_not_create_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");

    let config = CreateOrUpdateConfig::new(&path, "Chess");
    let outcome = create_or_update(&config, |_, _| Change::Skip).unwrap();

    assert_eq!(outcome, UpdateOutcome::Unchanged);
    assert!(!path.exists());
}

#[test]
fn test_no_create_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");

    let config = CreateOrUpdateConfig::new(&path, "Chess").no_create();
    let result = create_or_update(&config, insert_or_touch);
    assert!(matches!(result, Err(ShortcutError::Vdf(_))));
    assert!(!path.exists());
}

#[test]
fn test_updates_first_match_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");
    seed(&path, &["Chess", "woah", "Chess"]);

    let mut seen = None;
    let config = CreateOrUpdateConfig::new(&path, "Chess");
    let outcome = create_or_update(&config, |name, lookup| {
        seen = match lookup {
            Lookup::Found(existing) => Some(existing.id),
            Lookup::NotFound => None,
        };
        insert_or_touch(name, lookup)
    })
    .unwrap();

    assert_eq!(outcome, UpdateOutcome::UpdatedEntry);
    assert_eq!(seen, Some(0));
    let shortcuts = read_shortcuts(&path).unwrap();
    assert_eq!(shortcuts.len(), 3);
    assert_eq!(shortcuts[0].launch_options, "-touched");
    assert_eq!(shortcuts[2].launch_options, "");
}

#[test]
fn test_appends_with_next_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");
    seed(&path, &["Chess", "woah"]);

    let config = CreateOrUpdateConfig::new(&path, "Another Cool app");
    let outcome = create_or_update(&config, insert_or_touch).unwrap();

    assert_eq!(outcome, UpdateOutcome::AddedNewEntry);
    let shortcuts = read_shortcuts(&path).unwrap();
    let ids: Vec<_> = shortcuts.iter().map(|s| s.id).collect();
    assert_eq!(ids, [0, 1, 2]);
    assert_eq!(shortcuts[2].app_name, "Another Cool app");
}

#[test]
fn test_shrinking_rewrite_truncates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");
    seed(&path, &["Chess"]);

    let config = CreateOrUpdateConfig::new(&path, "Chess");
    create_or_update(&config, |_, lookup| match lookup {
        Lookup::Found(existing) => Change::Replace(Shortcut {
            exe_path: String::new(),
            ..existing.clone()
        }),
        Lookup::NotFound => Change::Skip,
    })
    .unwrap();

    // Trailing bytes from the longer original would break the footer.
    let shortcuts = read_shortcuts(&path).unwrap();
    assert_eq!(shortcuts.len(), 1);
    assert_eq!(shortcuts[0].exe_path, "");
}

#[test]
fn test_empty_existing_file_is_empty_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");
    std::fs::write(&path, b"").unwrap();

    let config = CreateOrUpdateConfig::new(&path, "Chess");
    let outcome = create_or_update(&config, insert_or_touch).unwrap();

    assert_eq!(outcome, UpdateOutcome::AddedNewEntry);
    assert_eq!(read_shortcuts(&path).unwrap().len(), 1);
}

#[test]
fn test_corrupt_file_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.vdf");
    std::fs::write(&path, b"not a shortcuts file").unwrap();

    let config = CreateOrUpdateConfig::new(&path, "Chess");
    let result = create_or_update(&config, insert_or_touch);

    assert!(matches!(result, Err(ShortcutError::Vdf(_))));
    assert_eq!(std::fs::read(&path).unwrap(), b"not a shortcuts file");
}

#[test]
fn test_invalid_config() {
    let result = create_or_update(&CreateOrUpdateConfig::new("x.vdf", ""), insert_or_touch);
    assert!(matches!(result, Err(ShortcutError::InvalidConfig(_))));
}
