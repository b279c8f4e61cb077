//! Position-independent letter frequencies

use super::ProbabilityModel;
use crate::core::Word;
use rustc_hash::FxHashMap;

/// Probability of each letter across all letters of a bank
///
/// Anagrams score identically. Letters that never occur have probability 0.
#[derive(Debug, Clone, Default)]
pub struct LetterSetLikelihood {
    probabilities: FxHashMap<u8, f64>,
}

impl LetterSetLikelihood {
    #[must_use]
    pub fn fit(words: &[Word]) -> Self {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        let mut total = 0usize;

        for word in words {
            for &letter in word.letters() {
                *counts.entry(letter).or_insert(0) += 1;
                total += 1;
            }
        }

        let probabilities = counts
            .into_iter()
            .map(|(letter, count)| (letter, count as f64 / total as f64))
            .collect();

        Self { probabilities }
    }

    /// Probability of `letter`, independent of position
    #[must_use]
    pub fn probability(&self, letter: u8) -> f64 {
        self.probabilities.get(&letter).copied().unwrap_or(0.0)
    }
}

impl ProbabilityModel for LetterSetLikelihood {
    fn letter_probability(&self, _position: usize, letter: u8) -> f64 {
        self.probability(letter)
    }
}
