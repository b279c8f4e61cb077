//! Letter-state vocabulary and alphabet constants

use std::fmt;

/// Letters a word may contain, after case normalization
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Letters treated as vowels by the likelihood models
pub const VOWELS: &[u8; 5] = b"aeiou";

/// Check whether a (lowercase) letter is a vowel
#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter)
}

/// Feedback state of a single tile
///
/// Ordered by precedence: when a repeated letter is resolved, `Green` claims the
/// goal's copies before `Yellow`, and whatever is left over is `Grey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    /// Letter not present once greens and yellows have been accounted for
    Grey,
    /// Letter present elsewhere in the goal
    Yellow,
    /// Letter in the correct position
    Green,
}

impl LetterState {
    /// Single-character symbol used when parsing and printing patterns
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Grey => '-',
        }
    }

    /// Emoji square for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }

    /// Parse a pattern symbol
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/`X`/`x`/`.`/⬜.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | 'X' | 'x' | '.' | '⬜' => Some(Self::Grey),
            _ => None,
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Grey => "grey",
        };
        f.write_str(name)
    }
}
