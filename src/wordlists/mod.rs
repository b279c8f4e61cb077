//! Word lists for Wordle games
//!
//! Provides the embedded default bank, strict loading of custom lists, and the
//! sifting helpers used to derive new banks from a larger dictionary.

mod embedded;
pub mod loader;
pub mod process;

pub use embedded::{FIVE_LETTER, FIVE_LETTER_COUNT};
pub use loader::WordListError;

/// Names of the banks compiled into the binary
pub const BUILTIN_BANKS: &[&str] = &["five"];

/// Look up an embedded bank by name
#[must_use]
pub fn builtin(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "five" | "5" => Some(FIVE_LETTER),
        _ => None,
    }
}
