//! Command implementations
//!
//! Each command is a plain function over word lists and options so the binary
//! stays a thin argument-parsing layer.

pub mod auto;
pub mod benchmark;
pub mod filter;
pub mod play;
pub mod score;
pub mod sift;

pub use auto::run_auto;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use filter::{Observation, filter_words};
pub use play::{TerminalPlayer, run_play};
pub use score::score_words;
pub use sift::{SiftOptions, run_sift};

use crate::core::{EngineError, FeedbackParseError, Word, WordError};
use crate::game::{GameConfig, GameError};
use crate::likelihood::ModelConfig;
use crate::strategy::StrategyType;
use crate::wordlists::{self, WordListError, loader};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::io;

/// Errors surfaced by the commands
#[derive(Debug)]
pub enum CommandError {
    Word(WordError),
    Pattern(FeedbackParseError),
    Engine(EngineError),
    Game(GameError),
    WordList(WordListError),
    Io(io::Error),
    /// An argument that is well-formed but unusable, e.g. `"crane"` without a pattern
    Usage(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "{e}"),
            Self::Pattern(e) => write!(f, "{e}"),
            Self::Engine(e) => write!(f, "{e}"),
            Self::Game(e) => write!(f, "{e}"),
            Self::WordList(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Usage(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Pattern(e) => Some(e),
            Self::Engine(e) => Some(e),
            Self::Game(e) => Some(e),
            Self::WordList(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Usage(_) => None,
        }
    }
}

impl From<WordError> for CommandError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<FeedbackParseError> for CommandError {
    fn from(e: FeedbackParseError) -> Self {
        Self::Pattern(e)
    }
}

impl From<EngineError> for CommandError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<GameError> for CommandError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl From<WordListError> for CommandError {
    fn from(e: WordListError) -> Self {
        Self::WordList(e)
    }
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Settings shared by every command that plays games
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub game: GameConfig,
    pub model: ModelConfig,
    /// Strategy name as accepted by [`StrategyType::from_name`]
    pub strategy: String,
    /// Fixed seed for reproducible games; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            model: ModelConfig::default(),
            strategy: "max".to_string(),
            seed: None,
        }
    }
}

impl PlayOptions {
    #[must_use]
    pub fn strategy(&self) -> StrategyType {
        StrategyType::from_name(&self.strategy)
    }

    /// The game RNG; seeded when a seed was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Resolve `--bank`: a built-in bank name, or else a path to a word list file
///
/// # Errors
/// Returns `WordListError` if the file cannot be read or fails validation.
pub fn load_bank(name_or_path: &str) -> Result<Vec<Word>, WordListError> {
    match wordlists::builtin(name_or_path) {
        Some(words) => loader::words_from_slice(words),
        None => loader::load_from_file(name_or_path),
    }
}
