//! Game-level errors

use crate::core::EngineError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A goal cannot be drawn from an empty bank
    EmptyBank,
    /// A fixed goal must be one of the bank's original words
    GoalNotInBank(String),
    /// The game is already won or lost
    Finished,
    /// The guess source failed (e.g. reading input)
    Source(String),
    Engine(EngineError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBank => write!(f, "Cannot start a game with an empty word bank"),
            Self::GoalNotInBank(goal) => write!(f, "Goal word '{goal}' is not in the word bank"),
            Self::Finished => write!(f, "Game is already over"),
            Self::Source(msg) => write!(f, "Guess source failed: {msg}"),
            Self::Engine(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for GameError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}
