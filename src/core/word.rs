//! Wordle word representation
//!
//! A Word stores a lowercase ASCII word. Length is not fixed here; a word bank
//! enforces that all of its words share one length.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// A validated, lowercase Wordle word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidLetter { letter: char, position: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidLetter { letter, position } => {
                write!(f, "Invalid letter '{letter}' at position {position}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased; surrounding whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, contains non-ASCII characters,
    /// or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if let Some((position, letter)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(WordError::InvalidLetter { letter, position });
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word; provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// True when no letter appears twice
    #[must_use]
    pub fn has_unique_letters(&self) -> bool {
        self.char_counts().len() == self.len()
    }

    /// Get the count of each letter in the word
    ///
    /// This is the remaining-letter pool that scoring consumes.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
