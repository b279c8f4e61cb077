//! Word bank: the candidate set of a game
//!
//! The bank keeps an immutable snapshot of the words it was loaded with and a
//! current candidate set that only ever shrinks until it is reset.

use crate::core::consistency::matches;
use crate::core::{ALPHABET, EngineError, Feedback, Word};
use rayon::prelude::*;
use std::ops::Index;

/// Candidate set with an original snapshot for resetting
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    original: Vec<Word>,
    current: Vec<Word>,
}

impl WordBank {
    /// Create a bank whose candidates start as a copy of `words`
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut bank = Self::default();
        bank.load(words);
        bank
    }

    /// Replace both the snapshot and the candidate set with `words`
    pub fn load(&mut self, words: Vec<Word>) {
        self.current.clone_from(&words);
        self.original = words;
    }

    /// Restore the candidate set to the original snapshot
    pub fn reset(&mut self) {
        self.current.clone_from(&self.original);
    }

    /// Keep only candidates that would have produced `feedback` for `guess`
    ///
    /// The surviving words are collected into a new vector in their original
    /// order. An empty result is a valid state, so callers must check
    /// [`is_empty`](Self::is_empty) afterwards. Returns the number of candidates left.
    ///
    /// # Errors
    /// Returns `LengthMismatch`/`LetterMismatch` if `feedback` does not describe
    /// `guess`; the bank is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::bank::WordBank;
    /// use wordle_sim::core::{Word, score};
    ///
    /// let words = ["crane", "trace", "place", "slate"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut bank = WordBank::new(words);
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = score(&Word::new("crane").unwrap(), &guess).unwrap();
    ///
    /// assert_eq!(bank.filter(&guess, &feedback).unwrap(), 1);
    /// assert_eq!(bank[0].text(), "crane");
    /// ```
    pub fn filter(&mut self, guess: &Word, feedback: &Feedback) -> Result<usize, EngineError> {
        feedback.check_describes(guess)?;

        let kept: Vec<Word> = self
            .current
            .par_iter()
            .filter(|candidate| matches(candidate, guess, feedback))
            .cloned()
            .collect();

        self.current = kept;
        Ok(self.current.len())
    }

    /// Remove one exact occurrence of `word` from the candidate set
    ///
    /// # Errors
    /// Returns `EngineError::NotFound` if the word is not a current candidate.
    pub fn remove(&mut self, word: &Word) -> Result<(), EngineError> {
        let position = self
            .current
            .iter()
            .position(|w| w == word)
            .ok_or_else(|| EngineError::NotFound(word.text().to_string()))?;
        self.current.remove(position);
        Ok(())
    }

    /// Number of current candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Iterate over current candidates
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.current.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.current.get(index)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.current.contains(word)
    }

    /// Current candidates as a slice
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.current
    }

    /// The snapshot the bank was loaded with
    #[must_use]
    pub fn original(&self) -> &[Word] {
        &self.original
    }

    /// Word length shared by the bank, taken from the first original word
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.original.first().map(Word::len)
    }

    /// Letter-by-position occurrence counts over the current candidates
    ///
    /// Row `i` is the i-th letter of the alphabet, column `j` a position.
    #[must_use]
    pub fn letter_matrix(&self) -> Vec<Vec<usize>> {
        let width = self.current.first().map_or(0, Word::len);
        let mut matrix = vec![vec![0; width]; ALPHABET.len()];

        for word in &self.current {
            for (position, &letter) in word.letters().iter().enumerate() {
                if let Some(row) = matrix.get_mut(usize::from(letter - b'a'))
                    && let Some(cell) = row.get_mut(position)
                {
                    *cell += 1;
                }
            }
        }

        matrix
    }
}

impl Index<usize> for WordBank {
    type Output = Word;

    fn index(&self, index: usize) -> &Self::Output {
        &self.current[index]
    }
}

impl<'a> IntoIterator for &'a WordBank {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(bank: &WordBank) -> Vec<&str> {
        bank.iter().map(Word::text).collect()
    }

    #[test]
    fn load_copies_into_current() {
        let bank = WordBank::new(words(&["crane", "slate"]));
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.original().len(), 2);
        assert_eq!(bank.word_length(), Some(5));
    }

    #[test]
    fn round_trip_scenario() {
        let mut bank = WordBank::new(words(&["crane", "trace", "place", "slate"]));
        let guess = w("trace");
        let feedback = score(&w("crane"), &guess).unwrap();
        assert_eq!(feedback.to_string(), "-GGYG");

        bank.filter(&guess, &feedback).unwrap();

        // "trace" would have scored all green, so it cannot be the goal
        assert_eq!(texts(&bank), vec!["crane"]);
    }

    #[test]
    fn filter_preserves_order_and_never_grows() {
        let list = ["irate", "crate", "grate", "crane", "slate", "trace"];
        let mut bank = WordBank::new(words(&list));
        let guess = w("crane");
        let feedback = score(&w("grate"), &guess).unwrap();

        let before = texts(&bank).into_iter().map(String::from).collect::<Vec<_>>();
        let remaining = bank.filter(&guess, &feedback).unwrap();

        assert!(remaining <= list.len());
        assert!(bank.contains(&w("grate")));
        let positions: Vec<usize> = bank
            .iter()
            .map(|kept| before.iter().position(|b| b == kept.text()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn filter_is_idempotent() {
        let mut bank = WordBank::new(words(&["irate", "crate", "grate", "slate"]));
        let guess = w("crane");
        let feedback = score(&w("grate"), &guess).unwrap();

        bank.filter(&guess, &feedback).unwrap();
        let once = texts(&bank).join(",");
        bank.filter(&guess, &feedback).unwrap();
        assert_eq!(texts(&bank).join(","), once);
    }

    #[test]
    fn filter_to_empty_is_not_an_error() {
        let mut bank = WordBank::new(words(&["crane", "slate"]));
        let guess = w("zzzzz");
        let feedback = Feedback::parse(&guess, "GGGGG").unwrap();

        assert_eq!(bank.filter(&guess, &feedback).unwrap(), 0);
        assert!(bank.is_empty());
    }

    #[test]
    fn filter_rejects_mismatched_feedback_without_touching_bank() {
        let mut bank = WordBank::new(words(&["crane", "slate"]));
        let feedback = score(&w("crane"), &w("trace")).unwrap();

        assert!(bank.filter(&w("slate"), &feedback).is_err());
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn filter_keeps_duplicates_consistently() {
        let mut bank = WordBank::new(words(&["crane", "crane", "slate"]));
        let guess = w("crane");
        let feedback = score(&w("crane"), &guess).unwrap();
        assert_eq!(bank.filter(&guess, &feedback).unwrap(), 2);
    }

    #[test]
    fn reset_restores_original() {
        let mut bank = WordBank::new(words(&["crane", "slate", "trace"]));
        bank.remove(&w("slate")).unwrap();
        assert_eq!(bank.len(), 2);

        bank.reset();
        assert_eq!(texts(&bank), vec!["crane", "slate", "trace"]);
    }

    #[test]
    fn remove_missing_word_is_not_found() {
        let mut bank = WordBank::new(words(&["crane"]));
        assert_eq!(
            bank.remove(&w("slate")),
            Err(EngineError::NotFound("slate".to_string()))
        );
    }

    #[test]
    fn indexing_and_get() {
        let bank = WordBank::new(words(&["crane", "slate"]));
        assert_eq!(bank[1].text(), "slate");
        assert_eq!(bank.get(0).map(Word::text), Some("crane"));
        assert!(bank.get(2).is_none());
    }

    #[test]
    fn letter_matrix_counts_positions() {
        let bank = WordBank::new(words(&["crane", "crate", "slate"]));
        let matrix = bank.letter_matrix();

        assert_eq!(matrix.len(), 26);
        assert_eq!(matrix[usize::from(b'c' - b'a')][0], 2);
        assert_eq!(matrix[usize::from(b'a' - b'a')][2], 3);
        assert_eq!(matrix[usize::from(b'e' - b'a')][4], 3);
        assert_eq!(matrix[usize::from(b'z' - b'a')].iter().sum::<usize>(), 0);
    }
}
