//! Guess sources
//!
//! Anything that can propose the next guess for a game: a strategy, a human at
//! a terminal, or a fixed script.

use super::{Game, GameError};
use crate::core::Word;
use crate::likelihood::{LikelihoodModel, ModelConfig};
use crate::strategy::Strategy;
use log::debug;
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// Produces guesses for a game
pub trait GuessSource {
    /// Propose the next guess, or `None` to give up
    ///
    /// # Errors
    /// Returns `GameError::Source` if the guess cannot be obtained (e.g. I/O).
    fn next_guess(&mut self, game: &Game) -> Result<Option<Word>, GameError>;
}

/// Automatic player driven by a strategy and a likelihood model
///
/// With `recompute_per_turn` set in the game config, the model is refit on the
/// current candidates before every guess; otherwise it is fit once on the
/// bank's original words and reused.
pub struct StrategyPlayer<S: Strategy> {
    strategy: S,
    model_config: ModelConfig,
    rng: StdRng,
    cached: Option<LikelihoodModel>,
}

impl<S: Strategy> StrategyPlayer<S> {
    #[must_use]
    pub const fn new(strategy: S, model_config: ModelConfig, rng: StdRng) -> Self {
        Self {
            strategy,
            model_config,
            rng,
            cached: None,
        }
    }
}

impl<S: Strategy> GuessSource for StrategyPlayer<S> {
    fn next_guess(&mut self, game: &Game) -> Result<Option<Word>, GameError> {
        let bank = game.bank();

        let model = if game.config().recompute_per_turn {
            self.cached
                .insert(LikelihoodModel::fit(self.model_config.kind, bank.words()))
        } else {
            self.cached.get_or_insert_with(|| {
                LikelihoodModel::fit(self.model_config.kind, bank.original())
            })
        };

        let guess = self
            .strategy
            .select_guess(bank.words(), model, self.model_config.scope, &mut self.rng)
            .cloned();

        if guess.is_none() {
            debug!("Strategy has no candidates to choose from");
        }

        Ok(guess)
    }
}

/// Plays a fixed sequence of guesses, then gives up
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    guesses: VecDeque<Word>,
}

impl ScriptedPlayer {
    #[must_use]
    pub fn new(guesses: Vec<Word>) -> Self {
        Self {
            guesses: guesses.into(),
        }
    }

    /// Guesses not yet played
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl GuessSource for ScriptedPlayer {
    fn next_guess(&mut self, _game: &Game) -> Result<Option<Word>, GameError> {
        Ok(self.guesses.pop_front())
    }
}
