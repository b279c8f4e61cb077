//! Sift command
//!
//! Derives a game bank from a raw dictionary file.

use super::CommandError;
use crate::wordlists::loader::parse_words_lenient;
use crate::wordlists::process::{to_lines, with_unique_letters, words_of_length};
use log::info;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SiftOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub length: usize,
    /// Drop words with a repeated letter
    pub unique: bool,
}

/// Write the words of `options.input` that pass the filters to `options.output`
///
/// Returns the number of words written.
///
/// # Errors
/// Returns an I/O error if either file cannot be accessed.
pub fn run_sift(options: &SiftOptions) -> Result<usize, CommandError> {
    let content = fs::read_to_string(&options.input)?;
    let words = parse_words_lenient(&content);

    let mut sifted = words_of_length(&words, options.length);
    if options.unique {
        sifted = with_unique_letters(&sifted);
    }

    fs::write(&options.output, to_lines(&sifted))?;
    info!(
        "Sifted {} of {} words into {}",
        sifted.len(),
        words.len(),
        options.output.display()
    );

    Ok(sifted.len())
}
