//! Reading and rewriting shortcuts files.
//!
//! Updates are whole-file: the file is parsed, one entry is replaced or
//! appended, and the complete document is written back over the original
//! content.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, info_span};

use steamvdf_codec::{Document, MAX_IDENTIFIER, ReaderOptions, VdfError, VdfReader, VdfWriter};

use crate::error::{Result, ShortcutError};
use crate::shortcut::{Shortcut, document_from_shortcuts, shortcuts_from_document};

/// Default permissions for newly created shortcuts files.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Read all shortcuts from a stream.
pub fn read_shortcuts_from<R: Read>(reader: R) -> Result<Vec<Shortcut>> {
    read_shortcuts_from_with_options(reader, shortcuts_reader_options())
}

/// Read all shortcuts from a stream with options.
pub fn read_shortcuts_from_with_options<R: Read>(
    reader: R,
    options: ReaderOptions,
) -> Result<Vec<Shortcut>> {
    let document = VdfReader::with_options(reader, options).read_document()?;
    Ok(shortcuts_from_document(&document))
}

/// Read all shortcuts from a file.
pub fn read_shortcuts(path: &Path) -> Result<Vec<Shortcut>> {
    let document = VdfReader::open_with_options(path, shortcuts_reader_options())?.read_document()?;
    debug!(path = %path.display(), count = document.len(), "read shortcuts");
    Ok(shortcuts_from_document(&document))
}

/// Write shortcuts as a complete document.
pub fn write_shortcuts<W: Write>(shortcuts: &[Shortcut], writer: W) -> Result<()> {
    VdfWriter::new(writer).write_document(&document_from_shortcuts(shortcuts))?;
    Ok(())
}

fn shortcuts_reader_options() -> ReaderOptions {
    ReaderOptions::new().with_name(crate::shortcut::COLLECTION_NAME)
}

/// What the update callback saw for the match name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The first shortcut whose name matched.
    Found(&'a Shortcut),
    NotFound,
}

/// What the update callback wants written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Overwrite the matched entry. With no match this appends instead.
    Replace(Shortcut),
    /// Append a new entry; its id is set to the current entry count.
    Insert(Shortcut),
    /// Leave the file untouched.
    Skip,
}

/// Result of [`create_or_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    Unchanged,
    CreatedNewFile,
    UpdatedEntry,
    AddedNewEntry,
}

impl std::fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::Unchanged => "no changes were made to the file",
            Self::CreatedNewFile => "created new file",
            Self::UpdatedEntry => "updated existing entry in the file",
            Self::AddedNewEntry => "added new entry to the file",
        };
        write!(f, "{message}")
    }
}

/// Options for [`create_or_update`].
#[derive(Debug, Clone)]
pub struct CreateOrUpdateConfig {
    /// Shortcuts file to update.
    pub path: PathBuf,
    /// `app_name` to look up.
    pub match_name: String,
    /// Unix permissions for a newly created file (default: 0o644).
    pub mode: u32,
    /// Create the file when it does not exist (default: true).
    pub create_missing: bool,
    /// Options used to parse the existing content.
    pub reader_options: ReaderOptions,
}

impl CreateOrUpdateConfig {
    /// Create a config with default options.
    pub fn new(path: impl Into<PathBuf>, match_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            match_name: match_name.into(),
            mode: DEFAULT_FILE_MODE,
            create_missing: true,
            reader_options: shortcuts_reader_options(),
        }
    }

    /// Set the permissions of a newly created file.
    #[must_use]
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Fail instead of creating a missing file.
    #[must_use]
    pub fn no_create(mut self) -> Self {
        self.create_missing = false;
        self
    }

    /// Set the options used to parse the existing content.
    #[must_use]
    pub fn with_reader_options(mut self, options: ReaderOptions) -> Self {
        self.reader_options = options;
        self
    }

    /// Check that the path and match name are set.
    pub fn validate(&self) -> Result<()> {
        if self.match_name.is_empty() {
            return Err(ShortcutError::invalid_config(
                "the shortcut name to match cannot be empty",
            ));
        }
        if self.path.as_os_str().is_empty() {
            return Err(ShortcutError::invalid_config(
                "the shortcuts file path cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Update the first shortcut named `config.match_name`, or add one.
///
/// `decide` is called exactly once with the match name and what was found.
/// A missing file is created only when `decide` returns something to write.
pub fn create_or_update<F>(config: &CreateOrUpdateConfig, decide: F) -> Result<UpdateOutcome>
where
    F: FnOnce(&str, Lookup<'_>) -> Change,
{
    config.validate()?;
    let span = info_span!(
        "create_or_update",
        path = %config.path.display(),
        name = %config.match_name
    );
    let _guard = span.enter();

    let mut existing = match OpenOptions::new().read(true).write(true).open(&config.path) {
        Ok(file) => Some(file),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if !config.create_missing {
                return Err(VdfError::FileNotFound {
                    path: config.path.clone(),
                }
                .into());
            }
            None
        }
        Err(e) => return Err(e.into()),
    };

    let mut shortcuts = match existing.as_mut() {
        Some(file) => read_existing(file, &config.reader_options)?,
        None => Vec::new(),
    };

    let position = shortcuts
        .iter()
        .position(|shortcut| shortcut.app_name == config.match_name);
    let lookup = match position {
        Some(idx) => Lookup::Found(&shortcuts[idx]),
        None => Lookup::NotFound,
    };

    let outcome = match (decide(&config.match_name, lookup), position) {
        (Change::Skip, _) => {
            info!("shortcut left unchanged");
            return Ok(UpdateOutcome::Unchanged);
        }
        (Change::Replace(shortcut), Some(idx)) => {
            shortcuts[idx] = shortcut;
            UpdateOutcome::UpdatedEntry
        }
        (Change::Replace(shortcut) | Change::Insert(shortcut), _) => {
            append(&mut shortcuts, shortcut)?;
            UpdateOutcome::AddedNewEntry
        }
    };

    let document = document_from_shortcuts(&shortcuts);
    match existing {
        Some(mut file) => {
            overwrite(&mut file, &document)?;
            info!(%outcome, count = shortcuts.len(), "shortcuts file rewritten");
            Ok(outcome)
        }
        None => {
            let file = create_file(&config.path, config.mode)?;
            VdfWriter::new(file).write_document(&document)?;
            info!(count = shortcuts.len(), "shortcuts file created");
            Ok(UpdateOutcome::CreatedNewFile)
        }
    }
}

fn read_existing(file: &mut File, options: &ReaderOptions) -> Result<Vec<Shortcut>> {
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    if data.is_empty() {
        debug!("existing file is empty");
        return Ok(Vec::new());
    }
    let document = Document::parse(&data, options)?;
    Ok(shortcuts_from_document(&document))
}

fn append(shortcuts: &mut Vec<Shortcut>, mut shortcut: Shortcut) -> Result<()> {
    shortcut.id = u64::try_from(shortcuts.len())
        .ok()
        .filter(|id| *id <= MAX_IDENTIFIER)
        .ok_or_else(|| ShortcutError::invalid_config("too many shortcuts for a 10-digit id"))?;
    shortcuts.push(shortcut);
    Ok(())
}

/// Rewind, truncate and rewrite an open file.
fn overwrite(file: &mut File, document: &Document) -> Result<()> {
    file.seek(SeekFrom::Start(0))?;
    file.set_len(0)?;
    VdfWriter::new(file).write_document(document)?;
    Ok(())
}

#[cfg(unix)]
fn create_file(path: &Path, mode: u32) -> Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    Ok(OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)?)
}

#[cfg(not(unix))]
fn create_file(path: &Path, _mode: u32) -> Result<File> {
    Ok(OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(CreateOrUpdateConfig::new("shortcuts.vdf", "").validate().is_err());
        assert!(CreateOrUpdateConfig::new("", "Chess").validate().is_err());
        assert!(CreateOrUpdateConfig::new("shortcuts.vdf", "Chess").validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = CreateOrUpdateConfig::new("a.vdf", "Chess")
            .with_mode(0o600)
            .no_create();
        assert_eq!(config.mode, 0o600);
        assert!(!config.create_missing);
        assert_eq!(config.reader_options.name, "shortcuts");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(UpdateOutcome::AddedNewEntry.to_string(), "added new entry to the file");
        assert_eq!(
            serde_json::to_string(&UpdateOutcome::CreatedNewFile).unwrap(),
            "\"created_new_file\""
        );
    }

    #[test]
    fn test_write_then_read_stream() {
        let shortcuts = vec![Shortcut::new("Chess"), Shortcut { id: 1, ..Shortcut::new("woah") }];
        let mut buffer = Vec::new();
        write_shortcuts(&shortcuts, &mut buffer).unwrap();
        assert_eq!(read_shortcuts_from(buffer.as_slice()).unwrap(), shortcuts);
    }

    #[test]
    fn test_append_sets_id() {
        let mut shortcuts = vec![Shortcut::new("a"), Shortcut::new("b")];
        append(&mut shortcuts, Shortcut { id: 99, ..Shortcut::new("c") }).unwrap();
        assert_eq!(shortcuts[2].id, 2);
    }
}
