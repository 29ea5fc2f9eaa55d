//! The shortcut record and its mapping to VDF fields.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use steamvdf_codec::{Document, Field, FieldType, Record};

/// Header name tag of the shortcuts collection.
pub const COLLECTION_NAME: &str = "shortcuts";

pub const APP_NAME_FIELD: &str = "AppName";
pub const EXE_PATH_FIELD: &str = "Exe";
pub const START_DIR_FIELD: &str = "StartDir";
pub const ICON_PATH_FIELD: &str = "icon";
pub const SHORTCUT_PATH_FIELD: &str = "ShortcutPath";
pub const LAUNCH_OPTIONS_FIELD: &str = "LaunchOptions";
pub const IS_HIDDEN_FIELD: &str = "IsHidden";
pub const ALLOW_DESKTOP_CONFIG_FIELD: &str = "AllowDesktopConfig";
pub const ALLOW_OVERLAY_FIELD: &str = "AllowOverlay";
pub const IS_OPEN_VR_FIELD: &str = "OpenVR";
pub const LAST_PLAY_TIME_FIELD: &str = "LastPlayTime";
pub const TAGS_FIELD: &str = "tags";

const QUOTE: char = '"';

/// A non-Steam game shortcut.
///
/// `exe_path` and `start_dir` hold unquoted paths; the quotes Steam stores
/// around them are added on write and removed on read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: u64,
    pub app_name: String,
    pub exe_path: String,
    pub start_dir: String,
    pub icon_path: String,
    pub shortcut_path: String,
    pub launch_options: String,
    pub is_hidden: bool,
    pub allow_desktop_config: bool,
    pub allow_overlay: bool,
    pub is_open_vr: bool,
    /// Seconds since the Unix epoch.
    pub last_play_time: i32,
    pub tags: Vec<String>,
}

impl Shortcut {
    /// Create a shortcut with the given display name and default attributes.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    /// Build the record, emitting every attribute in Steam's field order.
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new(self.id)
            .with_text(APP_NAME_FIELD, self.app_name.as_str())
            .with_text(EXE_PATH_FIELD, quote(&self.exe_path))
            .with_text(START_DIR_FIELD, quote(&self.start_dir))
            .with_text(ICON_PATH_FIELD, self.icon_path.as_str())
            .with_text(SHORTCUT_PATH_FIELD, self.shortcut_path.as_str())
            .with_text(LAUNCH_OPTIONS_FIELD, self.launch_options.as_str())
            .with_bool(IS_HIDDEN_FIELD, self.is_hidden)
            .with_bool(ALLOW_DESKTOP_CONFIG_FIELD, self.allow_desktop_config)
            .with_bool(ALLOW_OVERLAY_FIELD, self.allow_overlay)
            .with_bool(IS_OPEN_VR_FIELD, self.is_open_vr)
            .with_number(LAST_PLAY_TIME_FIELD, self.last_play_time)
            .with_list(TAGS_FIELD, self.tags.iter().map(String::as_str))
    }

    /// Read a shortcut from a record.
    ///
    /// Unknown fields are ignored. A known field with the wrong kind leaves
    /// the attribute at its default.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let mut shortcut = Self {
            id: record.id().unwrap_or_default(),
            ..Self::default()
        };

        for field in record {
            let Some(name) = field.name() else {
                continue;
            };
            match name {
                APP_NAME_FIELD => read_text(field, &mut shortcut.app_name),
                EXE_PATH_FIELD => {
                    read_text(field, &mut shortcut.exe_path);
                    shortcut.exe_path = unquote(&shortcut.exe_path).to_string();
                }
                START_DIR_FIELD => {
                    read_text(field, &mut shortcut.start_dir);
                    shortcut.start_dir = unquote(&shortcut.start_dir).to_string();
                }
                ICON_PATH_FIELD => read_text(field, &mut shortcut.icon_path),
                SHORTCUT_PATH_FIELD => read_text(field, &mut shortcut.shortcut_path),
                LAUNCH_OPTIONS_FIELD => read_text(field, &mut shortcut.launch_options),
                IS_HIDDEN_FIELD => read_bool(field, &mut shortcut.is_hidden),
                ALLOW_DESKTOP_CONFIG_FIELD => read_bool(field, &mut shortcut.allow_desktop_config),
                ALLOW_OVERLAY_FIELD => read_bool(field, &mut shortcut.allow_overlay),
                IS_OPEN_VR_FIELD => read_bool(field, &mut shortcut.is_open_vr),
                LAST_PLAY_TIME_FIELD => match field.as_number() {
                    Some(value) => shortcut.last_play_time = value,
                    None => warn_kind(field, FieldType::Number),
                },
                TAGS_FIELD => match field.as_list() {
                    Some(items) => {
                        shortcut.tags = items.into_iter().map(Cow::into_owned).collect();
                    }
                    None => warn_kind(field, FieldType::List),
                },
                _ => {}
            }
        }

        shortcut
    }
}

fn read_text(field: &Field, target: &mut String) {
    match field.as_text() {
        Some(text) => *target = text.into_owned(),
        None => warn_kind(field, FieldType::Text),
    }
}

fn read_bool(field: &Field, target: &mut bool) {
    match field.as_number() {
        Some(value) => {
            if value != 0 && value != 1 {
                debug!(
                    field = field.name().unwrap_or_default(),
                    value, "flag holds neither 0 nor 1, reading it as set"
                );
            }
            *target = value != 0;
        }
        None => warn_kind(field, FieldType::Number),
    }
}

fn warn_kind(field: &Field, expected: FieldType) {
    warn!(
        field = field.name().unwrap_or_default(),
        %expected,
        found = ?field.field_type(),
        "unexpected field kind, keeping default"
    );
}

/// Wrap a value in one pair of double quotes.
///
/// Quotes already inside the value are kept, so `unquote(&quote(v)) == v`
/// for every `v`.
#[must_use]
pub fn quote(value: &str) -> String {
    format!("{QUOTE}{value}{QUOTE}")
}

/// Strip one surrounding pair of double quotes, if both are present.
#[must_use]
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
        .unwrap_or(value)
}

/// Map every record of a document to a shortcut.
#[must_use]
pub fn shortcuts_from_document(document: &Document) -> Vec<Shortcut> {
    document.records().iter().map(Shortcut::from_record).collect()
}

/// Build a shortcuts document.
#[must_use]
pub fn document_from_shortcuts(shortcuts: &[Shortcut]) -> Document {
    Document::new(COLLECTION_NAME).with_records(shortcuts.iter().map(Shortcut::to_record).collect())
}
