//! Legacy 64-bit identifiers for non-Steam games.
//!
//! Steam names grid images and builds launch URLs from this id. It is the
//! IEEE CRC32 of the executable path (quotes included) followed by the game
//! name, with the top bit set, shifted into the high word and tagged with
//! `0x0200_0000` in the low word.

use crc32fast::Hasher;

const HIGH_BIT: u32 = 0x8000_0000;
const LOW_WORD: u64 = 0x0200_0000;

/// Legacy id for a shortcut with the given name and executable path.
///
/// `exe_path` must be passed exactly as stored, including its quotes.
#[must_use]
pub fn legacy_shortcut_id(app_name: &str, exe_path: &str) -> u64 {
    let mut hasher = Hasher::new();
    hasher.update(exe_path.as_bytes());
    hasher.update(app_name.as_bytes());
    let top = u64::from(hasher.finalize() | HIGH_BIT);
    (top << 32) | LOW_WORD
}

/// Decimal string form of [`legacy_shortcut_id`], as used in file names.
#[must_use]
pub fn legacy_shortcut_id_string(app_name: &str, exe_path: &str) -> String {
    legacy_shortcut_id(app_name, exe_path).to_string()
}
