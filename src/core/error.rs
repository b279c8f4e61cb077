//! Errors raised by the scoring and filtering engine

use std::fmt;

/// Precondition failures of the core algorithms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Two sequences that must have equal length do not
    LengthMismatch { expected: usize, found: usize },
    /// A feedback tile does not carry the letter of the guess it claims to describe
    LetterMismatch {
        position: usize,
        expected: char,
        found: char,
    },
    /// The word to remove is not in the current candidate set
    NotFound(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {expected} letters, got {found}")
            }
            Self::LetterMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "Feedback does not describe the guess: position {position} is '{found}', expected '{expected}'"
            ),
            Self::NotFound(word) => write!(f, "Word '{word}' is not in the word bank"),
        }
    }
}

impl std::error::Error for EngineError {}
