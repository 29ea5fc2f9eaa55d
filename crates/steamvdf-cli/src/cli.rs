//! CLI argument definitions for the shortcuts tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "steamvdf",
    version,
    about = "Read and edit Steam shortcuts.vdf files",
    long_about = "Read and edit the binary shortcuts.vdf files Steam uses to store\n\
                  non-Steam game shortcuts, and manage their grid images."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every shortcut in a file.
    Read(ReadArgs),

    /// Print the raw field list of every record in a file.
    Dump(DumpArgs),

    /// Update the shortcut with the given name, adding it if missing.
    Update(UpdateArgs),

    /// List Steam accounts and their shortcut file locations.
    Users(UsersArgs),

    /// Report whether a Steam data directory exists on this machine.
    Installed,

    /// Manage grid images.
    #[command(subcommand)]
    Grid(GridCommand),

    /// Print the legacy 64-bit id of a shortcut.
    LegacyId(LegacyIdArgs),
}

#[derive(Parser)]
pub struct ReadArgs {
    /// Path to a shortcuts.vdf file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Reject lists whose element indices are out of sequence.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct DumpArgs {
    /// Path to a binary VDF file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Name tag expected in the file header.
    #[arg(long = "name", default_value = "shortcuts")]
    pub name: String,

    /// Reject lists whose element indices are out of sequence.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct UpdateArgs {
    /// Path to a shortcuts.vdf file (created if missing).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Display name of the shortcut to update or add.
    #[arg(long = "name", value_name = "APP")]
    pub name: String,

    /// Executable path, without quotes.
    #[arg(long = "exe", value_name = "PATH")]
    pub exe: Option<String>,

    /// Start directory, without quotes.
    #[arg(long = "start-dir", value_name = "DIR")]
    pub start_dir: Option<String>,

    /// Icon path.
    #[arg(long = "icon", value_name = "PATH")]
    pub icon: Option<String>,

    /// Launch options passed to the executable.
    #[arg(long = "launch-options", value_name = "ARGS", allow_hyphen_values = true)]
    pub launch_options: Option<String>,

    /// Tag (repeat for several; replaces existing tags).
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Set the last play time to now.
    #[arg(long = "touch")]
    pub touch: bool,

    /// Fail instead of creating a missing file.
    #[arg(long = "no-create")]
    pub no_create: bool,
}

#[derive(Parser)]
pub struct UsersArgs {
    /// Steam data directory (default: discovered for this platform).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum GridCommand {
    /// Copy an image into a shortcut's grid slot.
    Add(GridAddArgs),

    /// Remove a shortcut's grid images.
    Remove(GridRemoveArgs),
}

/// Identifies the shortcut a grid image belongs to.
#[derive(Parser)]
pub struct GridTarget {
    /// Steam data directory (default: discovered for this platform).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Steam account id.
    #[arg(long = "user", value_name = "ID")]
    pub user: String,

    /// Shortcut display name.
    #[arg(long = "name", value_name = "APP")]
    pub name: String,

    /// Shortcut executable path, without quotes.
    #[arg(long = "exe", value_name = "PATH")]
    pub exe: String,
}

#[derive(Parser)]
pub struct GridAddArgs {
    #[command(flatten)]
    pub target: GridTarget,

    /// Image file to copy.
    #[arg(long = "image", value_name = "FILE")]
    pub image: PathBuf,

    /// Replace an existing image.
    #[arg(long = "overwrite")]
    pub overwrite: bool,
}

#[derive(Parser)]
pub struct GridRemoveArgs {
    #[command(flatten)]
    pub target: GridTarget,

    /// Only remove the image with this extension.
    #[arg(long = "extension", value_name = "EXT")]
    pub extension: Option<String>,
}

#[derive(Parser)]
pub struct LegacyIdArgs {
    /// Shortcut display name.
    #[arg(long = "name", value_name = "APP")]
    pub name: String,

    /// Shortcut executable path, without quotes.
    #[arg(long = "exe", value_name = "PATH")]
    pub exe: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
