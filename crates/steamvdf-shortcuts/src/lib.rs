//! Steam non-Steam-game shortcuts.
//!
//! Builds on `steamvdf-codec` to read and update `shortcuts.vdf` files as
//! lists of [`Shortcut`]s, locate them in a Steam installation, and manage
//! the grid images named after each shortcut's legacy id.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use steamvdf_shortcuts::{Change, CreateOrUpdateConfig, Lookup, Shortcut, create_or_update};
//!
//! let config = CreateOrUpdateConfig::new("shortcuts.vdf", "Chess");
//! let outcome = create_or_update(&config, |name, lookup| match lookup {
//!     Lookup::Found(existing) => {
//!         let mut updated = existing.clone();
//!         updated.launch_options = "-fullscreen".to_string();
//!         Change::Replace(updated)
//!     }
//!     Lookup::NotFound => Change::Insert(Shortcut {
//!         exe_path: "/Applications/Chess.app".to_string(),
//!         ..Shortcut::new(name)
//!     }),
//! })
//! .unwrap();
//! println!("{outcome}");
//!
//! for shortcut in steamvdf_shortcuts::read_shortcuts(Path::new("shortcuts.vdf")).unwrap() {
//!     println!("{} {}", shortcut.id, shortcut.app_name);
//! }
//! ```

mod error;
pub mod grid;
pub mod locations;
pub mod naming;
mod shortcut;
mod store;

// Re-export error types
pub use error::{Result, ShortcutError};

// Re-export core types
pub use shortcut::{
    COLLECTION_NAME, Shortcut, document_from_shortcuts, quote, shortcuts_from_document, unquote,
};

// Re-export store functionality
pub use store::{
    Change, CreateOrUpdateConfig, DEFAULT_FILE_MODE, Lookup, UpdateOutcome, create_or_update,
    read_shortcuts, read_shortcuts_from, read_shortcuts_from_with_options, write_shortcuts,
};

pub use locations::{DataLocator, SteamLocations};
pub use naming::legacy_shortcut_id;
