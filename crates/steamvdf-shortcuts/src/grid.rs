//! Grid (library artwork) images for shortcuts.
//!
//! Images live in the account's grid directory and are named after the
//! shortcut's legacy id, keeping the source file's extension.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, ShortcutError};
use crate::locations::DataLocator;
use crate::naming::legacy_shortcut_id_string;

/// Default permissions for copied images.
pub const DEFAULT_IMAGE_MODE: u32 = 0o644;

/// Which shortcut an image belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDetails {
    /// Steam account id owning the grid directory.
    pub user_id: String,
    pub app_name: String,
    /// Executable path exactly as stored in the shortcut, quotes included.
    pub exe_path: String,
}

impl ImageDetails {
    pub fn new(
        user_id: impl Into<String>,
        app_name: impl Into<String>,
        exe_path: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            app_name: app_name.into(),
            exe_path: exe_path.into(),
        }
    }

    /// Image path without extension inside the account's grid directory.
    pub fn base_path<L: DataLocator>(&self, locator: &L) -> Result<PathBuf> {
        let grid_dir = locator
            .grid_dir_path(&self.user_id)?
            .ok_or_else(|| ShortcutError::NoGridDirectory {
                user_id: self.user_id.clone(),
            })?;
        Ok(grid_dir.join(legacy_shortcut_id_string(&self.app_name, &self.exe_path)))
    }
}

/// Options for [`add_image`].
#[derive(Debug, Clone)]
pub struct AddImageConfig {
    pub details: ImageDetails,
    /// Image to copy.
    pub source: PathBuf,
    /// Replace an existing image (default: false).
    pub overwrite: bool,
    /// Unix permissions of the copy (default: 0o644).
    pub mode: u32,
}

impl AddImageConfig {
    pub fn new(details: ImageDetails, source: impl Into<PathBuf>) -> Self {
        Self {
            details,
            source: source.into(),
            overwrite: false,
            mode: DEFAULT_IMAGE_MODE,
        }
    }

    /// Replace an image that is already present.
    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }
}

/// Result of [`add_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The image was copied to this path.
    Copied(PathBuf),
    /// An image already exists at this path and was kept.
    AlreadyPresent(PathBuf),
}

/// Copy an image into the grid directory.
pub fn add_image<L: DataLocator>(locator: &L, config: &AddImageConfig) -> Result<AddOutcome> {
    if config.source.as_os_str().is_empty() {
        return Err(ShortcutError::invalid_config("an image source path is required"));
    }

    let mut target = config.details.base_path(locator)?.into_os_string();
    if let Some(ext) = config.source.extension() {
        target.push(".");
        target.push(ext);
    }
    let target = PathBuf::from(target);

    if !config.overwrite && target.exists() {
        debug!(path = %target.display(), "grid image already present");
        return Ok(AddOutcome::AlreadyPresent(target));
    }

    let mut source = File::open(&config.source)?;
    let mut dest = create_image(&target, config.mode)?;
    std::io::copy(&mut source, &mut dest)?;
    info!(
        source = %config.source.display(),
        target = %target.display(),
        "grid image copied"
    );
    Ok(AddOutcome::Copied(target))
}

/// Remove grid images for a shortcut.
///
/// With an extension (`png` or `.png`) only that file is removed; without
/// one, every file whose name starts with the legacy id is removed.
///
/// # Returns
/// The paths that were removed.
pub fn remove_images<L: DataLocator>(
    locator: &L,
    details: &ImageDetails,
    extension: Option<&str>,
) -> Result<Vec<PathBuf>> {
    let base = details.base_path(locator)?;

    if let Some(ext) = extension.filter(|ext| !ext.is_empty()) {
        let mut target = base.into_os_string();
        if !ext.starts_with('.') {
            target.push(".");
        }
        target.push(ext);
        let target = PathBuf::from(target);
        return match std::fs::remove_file(&target) {
            Ok(()) => {
                info!(path = %target.display(), "grid image removed");
                Ok(vec![target])
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        };
    }

    let Some(dir) = base.parent() else {
        return Ok(Vec::new());
    };
    let prefix = base
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    let mut removed = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(&prefix));
        if matches {
            let path = entry.path();
            std::fs::remove_file(&path)?;
            info!(path = %path.display(), "grid image removed");
            removed.push(path);
        }
    }
    removed.sort();
    Ok(removed)
}

#[cfg(unix)]
fn create_image(path: &Path, mode: u32) -> Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    Ok(OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)?)
}

#[cfg(not(unix))]
fn create_image(path: &Path, _mode: u32) -> Result<File> {
    Ok(OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?)
}
