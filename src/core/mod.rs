//! Core domain types for Wordle
//!
//! This module contains the word and feedback types together with the two pure
//! algorithms everything else is built on: scoring a guess against a goal, and
//! deciding whether a candidate is consistent with observed feedback. Both share
//! one scoring routine so they cannot disagree on duplicate letters.

pub mod consistency;
mod error;
mod feedback;
mod letter;
mod word;

pub use consistency::{is_consistent, is_consistent_with_history};
pub use error::EngineError;
pub use feedback::{Feedback, FeedbackParseError, Tile, score};
pub use letter::{ALPHABET, LetterState, VOWELS, is_vowel};
pub use word::{Word, WordError};
