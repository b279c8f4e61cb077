//! Word bank processing
//!
//! Helpers for deriving game banks from a larger dictionary: keep the words of
//! one length, optionally only those without repeated letters.

use crate::core::Word;
use std::fmt::Write as _;

/// Words with exactly `length` letters, in input order
#[must_use]
pub fn words_of_length(words: &[Word], length: usize) -> Vec<Word> {
    words.iter().filter(|w| w.len() == length).cloned().collect()
}

/// Words in which no letter repeats, in input order
#[must_use]
pub fn with_unique_letters(words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .filter(|w| w.has_unique_letters())
        .cloned()
        .collect()
}

/// Render words as a newline-separated list
#[must_use]
pub fn to_lines(words: &[Word]) -> String {
    let mut out = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
    for word in words {
        let _ = writeln!(out, "{word}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::parse_words_lenient;

    #[test]
    fn sifts_by_length() {
        let words = parse_words_lenient("table\nabbey\nfox\nletters\ncrane");
        let five: Vec<String> = words_of_length(&words, 5)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(five, vec!["table", "abbey", "crane"]);
    }

    #[test]
    fn sifts_repeated_letters() {
        let words = parse_words_lenient("table\nabbey\nspeed\ncrane");
        let unique = with_unique_letters(&words);
        assert_eq!(to_lines(&unique), "table\ncrane\n");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(words_of_length(&[], 5).is_empty());
        assert_eq!(to_lines(&[]), "");
    }
}
