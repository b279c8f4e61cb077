//! Candidate consistency checks
//!
//! A candidate is consistent with an observed (guess, feedback) pair when scoring
//! the guess against the candidate reproduces that feedback exactly. The check
//! runs the same scoring routine as [`score`](super::score), so the two can never
//! disagree about repeated letters.

use super::feedback::score_states;
use super::{EngineError, Feedback, Word};

/// Could `candidate` be the goal, given that `guess` produced `feedback`?
///
/// A candidate whose length differs from the guess is never consistent.
///
/// # Errors
/// Returns `LengthMismatch`/`LetterMismatch` if `feedback` does not describe `guess`.
///
/// # Examples
/// ```
/// use wordle_sim::core::{Word, is_consistent, score};
///
/// let goal = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// let feedback = score(&goal, &guess).unwrap();
///
/// assert!(is_consistent(&goal, &guess, &feedback).unwrap());
/// assert!(!is_consistent(&Word::new("place").unwrap(), &guess, &feedback).unwrap());
/// ```
pub fn is_consistent(
    candidate: &Word,
    guess: &Word,
    feedback: &Feedback,
) -> Result<bool, EngineError> {
    feedback.check_describes(guess)?;
    Ok(matches(candidate, guess, feedback))
}

/// Check a candidate against every turn of a game history
///
/// # Errors
/// Returns the first precondition failure found in `history`.
pub fn is_consistent_with_history(
    candidate: &Word,
    history: &[(Word, Feedback)],
) -> Result<bool, EngineError> {
    for (guess, feedback) in history {
        if !is_consistent(candidate, guess, feedback)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Unchecked predicate; callers have already validated `feedback` against `guess`
pub(crate) fn matches(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    candidate.len() == guess.len()
        && score_states(candidate, guess)
            .into_iter()
            .eq(feedback.states())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterState, score};

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn goal_is_always_consistent_with_its_own_feedback() {
        let words = ["sassy", "assai", "apple", "speed", "erase", "floor", "robot"];
        for goal in words {
            for guess in words {
                let (goal, guess) = (w(goal), w(guess));
                let feedback = score(&goal, &guess).unwrap();
                assert!(
                    is_consistent(&goal, &guess, &feedback).unwrap(),
                    "{goal} should be consistent with {guess} -> {feedback}"
                );
            }
        }
    }

    #[test]
    fn duplicate_yellow_is_not_overcounted() {
        // Observed: guess "assai" against "sassy" gives YYG--. A candidate with
        // two a's would have produced a second yellow, so it is rejected.
        let guess = w("assai");
        let feedback = score(&w("sassy"), &guess).unwrap();

        assert!(!is_consistent(&w("sasaa"), &guess, &feedback).unwrap());
        assert!(is_consistent(&w("sassy"), &guess, &feedback).unwrap());
    }

    #[test]
    fn grey_letter_with_green_copy_elsewhere() {
        // f green, o yellow, o grey
        let guess = w("foo");
        let feedback = Feedback::from_states(
            &guess,
            &[LetterState::Green, LetterState::Yellow, LetterState::Grey],
        )
        .unwrap();

        // No word can satisfy this: the only non-green slots are 1 and 2, and the
        // yellow 'o' can be in neither (1 is its own position, 2 is marked grey)
        assert!(!is_consistent(&w("fdo"), &guess, &feedback).unwrap());
        assert!(!is_consistent(&w("fxo"), &guess, &feedback).unwrap());
        assert!(!is_consistent(&w("fox"), &guess, &feedback).unwrap());
    }

    #[test]
    fn different_length_candidate_is_inconsistent() {
        let guess = w("trace");
        let feedback = score(&w("crane"), &guess).unwrap();
        assert!(!is_consistent(&w("cranes"), &guess, &feedback).unwrap());
    }

    #[test]
    fn feedback_for_another_guess_is_rejected() {
        let feedback = score(&w("crane"), &w("trace")).unwrap();
        assert!(matches!(
            is_consistent(&w("crane"), &w("slate"), &feedback),
            Err(EngineError::LetterMismatch { .. })
        ));
    }

    #[test]
    fn history_requires_every_turn() {
        let goal = w("grate");
        let history: Vec<(Word, Feedback)> = ["crane", "irate"]
            .into_iter()
            .map(|g| {
                let guess = w(g);
                let feedback = score(&goal, &guess).unwrap();
                (guess, feedback)
            })
            .collect();

        assert!(is_consistent_with_history(&goal, &history).unwrap());
        assert!(!is_consistent_with_history(&w("crate"), &history).unwrap());
        assert!(is_consistent_with_history(&w("crate"), &[]).unwrap());
    }
}
