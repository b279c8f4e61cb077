//! Per-position letter frequencies

use super::ProbabilityModel;
use crate::core::Word;
use rustc_hash::FxHashMap;

/// Probability of each letter at each position
///
/// Counts are normalized by the total number of letters in the bank (not per
/// position), so probabilities over all positions sum to one.
#[derive(Debug, Clone, Default)]
pub struct LetterPositionLikelihood {
    by_position: Vec<FxHashMap<u8, f64>>,
}

impl LetterPositionLikelihood {
    #[must_use]
    pub fn fit(words: &[Word]) -> Self {
        let mut counts: Vec<FxHashMap<u8, usize>> = Vec::new();
        let mut total = 0usize;

        for word in words {
            if counts.len() < word.len() {
                counts.resize_with(word.len(), FxHashMap::default);
            }
            for (position, &letter) in word.letters().iter().enumerate() {
                *counts[position].entry(letter).or_insert(0) += 1;
                total += 1;
            }
        }

        let by_position = counts
            .into_iter()
            .map(|column| {
                column
                    .into_iter()
                    .map(|(letter, count)| (letter, count as f64 / total as f64))
                    .collect()
            })
            .collect();

        Self { by_position }
    }

    /// Probability of `letter` at `position`; zero outside the fitted range
    #[must_use]
    pub fn probability(&self, position: usize, letter: u8) -> f64 {
        self.by_position
            .get(position)
            .and_then(|column| column.get(&letter))
            .copied()
            .unwrap_or(0.0)
    }
}

impl ProbabilityModel for LetterPositionLikelihood {
    fn letter_probability(&self, position: usize, letter: u8) -> f64 {
        self.probability(position, letter)
    }
}
