//! Game orchestration
//!
//! A [`Game`] owns the goal word, the candidate bank and the turn history. Each
//! turn asks a [`GuessSource`] for a guess, scores it, narrows the bank and
//! checks for termination.

mod config;
mod error;
mod player;
mod state;

pub use config::GameConfig;
pub use error::GameError;
pub use player::{GuessSource, ScriptedPlayer, StrategyPlayer};
pub use state::{Game, GameStatus, GameSummary, Turn, TurnOutcome};
