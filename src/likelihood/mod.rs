//! Letter-frequency likelihood models
//!
//! A model assigns each word a score from how common its letters are in a word
//! bank. Strategies use these scores to pick guesses; they have no influence on
//! feedback or filtering.

mod letter_position;
mod letter_set;

pub use letter_position::LetterPositionLikelihood;
pub use letter_set::LetterSetLikelihood;

use crate::core::{Word, is_vowel};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Which letters of a word contribute to its score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterScope {
    #[default]
    All,
    Vowels,
    Consonants,
}

impl LetterScope {
    #[must_use]
    pub fn includes(self, letter: u8) -> bool {
        match self {
            Self::All => true,
            Self::Vowels => is_vowel(letter),
            Self::Consonants => !is_vowel(letter),
        }
    }
}

/// Available model families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// Letters counted regardless of position
    #[default]
    LetterSet,
    /// Letters counted per position
    LetterPosition,
}

/// Error for unknown model or scope names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown name: {}", self.0)
    }
}

impl std::error::Error for UnknownName {}

impl FromStr for ModelKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" | "letter-set" => Ok(Self::LetterSet),
            "position" | "letter-position" => Ok(Self::LetterPosition),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}

impl FromStr for LetterScope {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "vowels" => Ok(Self::Vowels),
            "consonants" => Ok(Self::Consonants),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}

/// Model selection plus the scope it scores with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelConfig {
    pub kind: ModelKind,
    pub scope: LetterScope,
}

/// A probability model over letters
pub trait ProbabilityModel: Send + Sync {
    /// Probability weight of `letter` appearing at `position`
    fn letter_probability(&self, position: usize, letter: u8) -> f64;

    /// Sum of letter probabilities over the letters of `word` in `scope`
    fn score(&self, word: &Word, scope: LetterScope) -> f64 {
        word.letters()
            .iter()
            .enumerate()
            .filter(|&(_, &letter)| scope.includes(letter))
            .map(|(position, &letter)| self.letter_probability(position, letter))
            .sum()
    }

    /// Score every word, in order
    fn score_all(&self, words: &[Word], scope: LetterScope) -> Vec<f64> {
        words.par_iter().map(|w| self.score(w, scope)).collect()
    }
}

/// Runtime-selected model
///
/// Keeps static dispatch while letting the CLI choose the model by name.
#[derive(Debug, Clone)]
pub enum LikelihoodModel {
    LetterSet(LetterSetLikelihood),
    LetterPosition(LetterPositionLikelihood),
}

impl LikelihoodModel {
    /// Fit a model of the given kind to `words`
    #[must_use]
    pub fn fit(kind: ModelKind, words: &[Word]) -> Self {
        log::debug!("Fitting {kind:?} model to {} words", words.len());
        match kind {
            ModelKind::LetterSet => Self::LetterSet(LetterSetLikelihood::fit(words)),
            ModelKind::LetterPosition => {
                Self::LetterPosition(LetterPositionLikelihood::fit(words))
            }
        }
    }
}

impl ProbabilityModel for LikelihoodModel {
    fn letter_probability(&self, position: usize, letter: u8) -> f64 {
        match self {
            Self::LetterSet(m) => m.letter_probability(position, letter),
            Self::LetterPosition(m) => m.letter_probability(position, letter),
        }
    }
}
