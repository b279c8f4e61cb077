//! Score command
//!
//! Scores a single guess against a goal.

use super::CommandError;
use crate::core::{Feedback, Word, score};

/// Parse both words and score `guess` against `goal`
///
/// # Errors
/// Returns an error for an invalid word or a length mismatch.
pub fn score_words(goal: &str, guess: &str) -> Result<(Word, Word, Feedback), CommandError> {
    let goal = Word::new(goal)?;
    let guess = Word::new(guess)?;
    let feedback = score(&goal, &guess)?;
    Ok((goal, guess, feedback))
}
