//! Filter command
//!
//! Applies feedback observed in a real game to a word bank and reports which
//! candidates are still possible.

use super::CommandError;
use crate::bank::WordBank;
use crate::core::{EngineError, Feedback, Word};
use log::debug;
use std::str::FromStr;

/// A guess and the feedback it received, written `guess:pattern`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub guess: Word,
    pub feedback: Feedback,
}

impl FromStr for Observation {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, pattern) = s.split_once(':').ok_or_else(|| {
            CommandError::Usage(format!("Expected GUESS:PATTERN (e.g. crane:-Y--G), got '{s}'"))
        })?;
        let guess = Word::new(guess.trim())?;
        let feedback = Feedback::parse(&guess, pattern)?;
        Ok(Self { guess, feedback })
    }
}

/// Narrow `words` by every observation in order
///
/// # Errors
/// Returns an error if an observation's guess length differs from the bank's
/// word length.
pub fn filter_words(
    words: Vec<Word>,
    observations: &[Observation],
) -> Result<WordBank, CommandError> {
    let mut bank = WordBank::new(words);

    for observation in observations {
        if let Some(length) = bank.word_length()
            && length != observation.guess.len()
        {
            return Err(EngineError::LengthMismatch {
                expected: length,
                found: observation.guess.len(),
            }
            .into());
        }

        let remaining = bank.filter(&observation.guess, &observation.feedback)?;
        debug!(
            "{} {} leaves {remaining} candidates",
            observation.guess, observation.feedback
        );
    }

    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn parses_observation() {
        let obs: Observation = "TRACE:-ggyg".parse().unwrap();
        assert_eq!(obs.guess.text(), "trace");
        assert_eq!(obs.feedback.to_string(), "-GGYG");
    }

    #[test]
    fn rejects_malformed_observation() {
        assert!(matches!(
            "crane".parse::<Observation>(),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            "crane:GGG".parse::<Observation>(),
            Err(CommandError::Pattern(_))
        ));
    }

    #[test]
    fn filters_by_each_observation() {
        let list = words(&["crane", "trace", "place", "slate", "grace"]);
        let obs: Observation = "trace:-GGYG".parse().unwrap();

        let bank = filter_words(list, &[obs]).unwrap();
        assert_eq!(bank.words(), words(&["crane"]).as_slice());
    }

    #[test]
    fn no_observations_keeps_everything() {
        let list = words(&["crane", "slate"]);
        let bank = filter_words(list.clone(), &[]).unwrap();
        assert_eq!(bank.words(), list.as_slice());
    }

    #[test]
    fn guess_length_must_match_bank() {
        let obs: Observation = "cranes:------".parse().unwrap();
        assert!(matches!(
            filter_words(words(&["crane"]), &[obs]),
            Err(CommandError::Engine(EngineError::LengthMismatch { .. }))
        ));
    }
}
