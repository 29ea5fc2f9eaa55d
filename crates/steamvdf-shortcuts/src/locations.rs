//! Steam data directory discovery and per-account paths.
//!
//! # Layout
//!
//! ```text
//! <data dir>/userdata/<user id>/config/shortcuts.vdf
//! <data dir>/userdata/<user id>/config/grid/
//! ```

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::error::{Result, ShortcutError};

const USER_DATA_DIR: &str = "userdata";
const USER_CONFIG_DIR: &str = "config";
const SHORTCUTS_FILE: &str = "shortcuts.vdf";
const GRID_DIR: &str = "grid";

/// Resolves account ids and the files that belong to them.
pub trait DataLocator {
    /// Ids of every account with a user data directory, sorted.
    fn user_ids(&self) -> Result<Vec<String>>;

    /// Path of an account's shortcuts file. The file may not exist yet.
    fn shortcuts_file_path(&self, user_id: &str) -> Result<PathBuf>;

    /// Path of an account's grid image directory, if it exists.
    fn grid_dir_path(&self, user_id: &str) -> Result<Option<PathBuf>>;
}

/// [`DataLocator`] over a Steam data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamLocations {
    data_dir: PathBuf,
}

impl SteamLocations {
    /// Use an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Find the data directory for the current platform.
    pub fn discover() -> Result<Self> {
        Ok(Self::new(data_dir_path()?))
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn user_data_dir(&self) -> PathBuf {
        self.data_dir.join(USER_DATA_DIR)
    }

    fn user_config_dir(&self, user_id: &str) -> Result<PathBuf> {
        validate_user_id(user_id)?;
        Ok(self.user_data_dir().join(user_id).join(USER_CONFIG_DIR))
    }
}

impl DataLocator for SteamLocations {
    fn user_ids(&self) -> Result<Vec<String>> {
        let dir = self.user_data_dir();
        if !dir.is_dir() {
            return Err(ShortcutError::MissingDirectory { path: dir });
        }

        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                ids.push(name.to_string());
            }
        }
        ids.sort();
        debug!(dir = %dir.display(), count = ids.len(), "listed user ids");
        Ok(ids)
    }

    fn shortcuts_file_path(&self, user_id: &str) -> Result<PathBuf> {
        Ok(self.user_config_dir(user_id)?.join(SHORTCUTS_FILE))
    }

    fn grid_dir_path(&self, user_id: &str) -> Result<Option<PathBuf>> {
        let path = self.user_config_dir(user_id)?.join(GRID_DIR);
        Ok(path.is_dir().then_some(path))
    }
}

fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(ShortcutError::invalid_config("a Steam user id is required"));
    }
    if user_id.contains(['/', '\\']) || user_id == "." || user_id == ".." {
        return Err(ShortcutError::invalid_config(format!(
            "invalid Steam user id '{user_id}'"
        )));
    }
    Ok(())
}

/// Candidate data directories for an operating system, most likely first.
#[must_use]
pub fn candidate_data_dirs(os: &str, home: Option<&Path>) -> Vec<PathBuf> {
    match os {
        "macos" => home
            .map(|home| vec![home.join("Library/Application Support/Steam")])
            .unwrap_or_default(),
        "linux" => home
            .map(|home| {
                vec![
                    home.join(".local/share/Steam"),
                    home.join(".steam/steam"),
                ]
            })
            .unwrap_or_default(),
        "windows" => vec![
            PathBuf::from(r"C:\Program Files (x86)\Steam"),
            PathBuf::from(r"C:\Program Files\Steam"),
        ],
        _ => Vec::new(),
    }
}

/// The first existing candidate data directory for this platform.
pub fn data_dir_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new();
    let home = base_dirs.as_ref().map(BaseDirs::home_dir);
    let candidates = candidate_data_dirs(std::env::consts::OS, home);

    for candidate in &candidates {
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "found Steam data directory");
            return Ok(candidate.clone());
        }
    }

    let searched = candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(ShortcutError::DataDirNotFound { searched })
}

/// Whether a Steam data directory exists on this machine.
#[must_use]
pub fn is_installed() -> bool {
    data_dir_path().is_ok()
}
