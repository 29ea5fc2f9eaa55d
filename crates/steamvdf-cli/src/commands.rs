//! Subcommand implementations.
//!
//! Each command returns its result for the caller to print.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use steamvdf_codec::{PartialDocument, ReaderOptions, VdfReader};
use steamvdf_shortcuts::grid::{AddImageConfig, AddOutcome, ImageDetails, add_image, remove_images};
use steamvdf_shortcuts::locations::{data_dir_path, is_installed};
use steamvdf_shortcuts::{
    Change, CreateOrUpdateConfig, DataLocator, Lookup, Shortcut, SteamLocations, UpdateOutcome,
    create_or_update, legacy_shortcut_id, quote, read_shortcuts_from_with_options,
};

use crate::cli::{
    DumpArgs, GridAddArgs, GridRemoveArgs, GridTarget, LegacyIdArgs, ReadArgs, UpdateArgs,
    UsersArgs,
};

pub fn run_read(args: &ReadArgs) -> Result<Vec<Shortcut>> {
    let _span = info_span!("read", file = %args.file.display()).entered();
    let file = std::fs::File::open(&args.file)
        .with_context(|| format!("open {}", args.file.display()))?;
    let mut options = ReaderOptions::new();
    if args.strict {
        options = options.strict();
    }
    read_shortcuts_from_with_options(file, options)
        .with_context(|| format!("read shortcuts from {}", args.file.display()))
}

pub fn run_dump(args: &DumpArgs) -> Result<PartialDocument> {
    let _span = info_span!("dump", file = %args.file.display()).entered();
    let mut options = ReaderOptions::new().with_name(args.name.as_str());
    if args.strict {
        options = options.strict();
    }
    let reader = VdfReader::open_with_options(&args.file, options)
        .with_context(|| format!("open {}", args.file.display()))?;
    reader
        .read_document_partial()
        .with_context(|| format!("frame {}", args.file.display()))
}

pub fn run_update(args: &UpdateArgs) -> Result<UpdateOutcome> {
    let _span = info_span!("update", file = %args.file.display(), name = %args.name).entered();
    let mut config = CreateOrUpdateConfig::new(&args.file, args.name.as_str());
    if args.no_create {
        config = config.no_create();
    }
    let now = now_epoch_seconds();

    create_or_update(&config, |name, lookup| match lookup {
        Lookup::Found(existing) => {
            let updated = apply_update(args, existing.clone(), now);
            if &updated == existing {
                Change::Skip
            } else {
                Change::Replace(updated)
            }
        }
        Lookup::NotFound => Change::Insert(apply_update(args, new_shortcut(name), now)),
    })
    .with_context(|| format!("update {}", args.file.display()))
}

/// Defaults for a shortcut added from the command line.
fn new_shortcut(name: &str) -> Shortcut {
    Shortcut {
        allow_desktop_config: true,
        allow_overlay: true,
        ..Shortcut::new(name)
    }
}

/// Apply the attributes given on the command line.
pub fn apply_update(args: &UpdateArgs, mut shortcut: Shortcut, now: i32) -> Shortcut {
    if let Some(exe) = &args.exe {
        shortcut.exe_path.clone_from(exe);
    }
    if let Some(start_dir) = &args.start_dir {
        shortcut.start_dir.clone_from(start_dir);
    }
    if let Some(icon) = &args.icon {
        shortcut.icon_path.clone_from(icon);
    }
    if let Some(launch_options) = &args.launch_options {
        shortcut.launch_options.clone_from(launch_options);
    }
    if !args.tags.is_empty() {
        shortcut.tags.clone_from(&args.tags);
    }
    if args.touch {
        shortcut.last_play_time = now;
    }
    shortcut
}

fn now_epoch_seconds() -> i32 {
    i32::try_from(chrono::Utc::now().timestamp()).unwrap_or(i32::MAX)
}

/// One Steam account and its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub user_id: String,
    pub shortcuts_file: PathBuf,
    pub shortcuts_exists: bool,
    pub grid_dir: Option<PathBuf>,
}

pub fn run_users(args: &UsersArgs) -> Result<Vec<UserEntry>> {
    let locations = steam_locations(args.data_dir.as_ref())?;
    debug!(data_dir = %locations.data_dir().display(), "listing users");

    locations
        .user_ids()
        .context("list Steam users")?
        .into_iter()
        .map(|user_id| -> Result<UserEntry> {
            let shortcuts_file = locations.shortcuts_file_path(&user_id)?;
            let grid_dir = locations.grid_dir_path(&user_id)?;
            Ok(UserEntry {
                shortcuts_exists: shortcuts_file.is_file(),
                user_id,
                shortcuts_file,
                grid_dir,
            })
        })
        .collect()
}

/// Data directory of the local Steam installation, if there is one.
#[must_use]
pub fn run_installed() -> Option<PathBuf> {
    if !is_installed() {
        return None;
    }
    data_dir_path().ok()
}

pub fn run_grid_add(args: &GridAddArgs) -> Result<AddOutcome> {
    let locations = steam_locations(args.target.data_dir.as_ref())?;
    let config = AddImageConfig::new(image_details(&args.target), &args.image)
        .overwrite(args.overwrite);
    add_image(&locations, &config)
        .with_context(|| format!("add grid image {}", args.image.display()))
}

pub fn run_grid_remove(args: &GridRemoveArgs) -> Result<Vec<PathBuf>> {
    let locations = steam_locations(args.target.data_dir.as_ref())?;
    remove_images(
        &locations,
        &image_details(&args.target),
        args.extension.as_deref(),
    )
    .context("remove grid images")
}

#[must_use]
pub fn run_legacy_id(args: &LegacyIdArgs) -> u64 {
    legacy_shortcut_id(&args.name, &quote(&args.exe))
}

/// Grid images are keyed on the executable path as Steam stores it.
fn image_details(target: &GridTarget) -> ImageDetails {
    ImageDetails::new(target.user.as_str(), target.name.as_str(), quote(&target.exe))
}

fn steam_locations(data_dir: Option<&PathBuf>) -> Result<SteamLocations> {
    match data_dir {
        Some(dir) => Ok(SteamLocations::new(dir)),
        None => SteamLocations::discover().context("locate Steam data directory"),
    }
}
