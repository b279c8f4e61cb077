//! Word list loading utilities
//!
//! Banks are newline-separated words. Strict loading rejects the first invalid
//! entry and requires a single word length; lenient loading skips bad entries
//! and is meant for raw dictionaries that are about to be sifted.

use crate::core::{Word, WordError};
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Errors from reading or validating a word list
#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
    InvalidWord {
        line: usize,
        word: String,
        source: WordError,
    },
    MixedLength {
        line: usize,
        word: String,
        expected: usize,
    },
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::InvalidWord { line, word, source } => {
                write!(f, "Line {line}: invalid word '{word}': {source}")
            }
            Self::MixedLength {
                line,
                word,
                expected,
            } => write!(
                f,
                "Line {line}: '{word}' has {} letters, expected {expected}",
                word.len()
            ),
            Self::Empty => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Validate words given as `(line number, text)` pairs
fn validate<'a>(
    entries: impl Iterator<Item = (usize, &'a str)>,
) -> Result<Vec<Word>, WordListError> {
    let mut words: Vec<Word> = Vec::new();

    for (line, text) in entries {
        let word = Word::new(text).map_err(|source| WordListError::InvalidWord {
            line,
            word: text.to_string(),
            source,
        })?;

        if let Some(first) = words.first()
            && first.len() != word.len()
        {
            return Err(WordListError::MixedLength {
                line,
                word: text.to_string(),
                expected: first.len(),
            });
        }

        words.push(word);
    }

    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    Ok(words)
}

/// Parse newline-separated words, skipping blank lines
///
/// # Errors
/// Returns `WordListError` for the first invalid word, a word whose length
/// differs from the first word, or an input with no words at all.
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\nSlate\n\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
///
/// assert!(parse_words("crane\ncranes").is_err());
/// ```
pub fn parse_words(content: &str) -> Result<Vec<Word>, WordListError> {
    validate(
        content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty()),
    )
}

/// Load and validate a word bank from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a validation error as
/// described for [`parse_words`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content)?;
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to a validated Word vector
///
/// # Errors
/// Same validation rules as [`parse_words`]; "lines" are 1-based slice positions.
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, WordListError> {
    validate(slice.iter().enumerate().map(|(i, &s)| (i + 1, s)))
}

/// Parse a raw dictionary, keeping every valid word of any length
///
/// Invalid entries are skipped and counted in a warning.
#[must_use]
pub fn parse_words_lenient(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|e| {
                    skipped += 1;
                    debug!("Skipping '{line}': {e}");
                })
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {skipped} invalid entries");
    }

    words
}
