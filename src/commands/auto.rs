//! Auto command
//!
//! One game played by a strategy.

use super::{CommandError, PlayOptions};
use crate::bank::WordBank;
use crate::core::Word;
use crate::game::{Game, GameSummary, StrategyPlayer};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Play a strategy-driven game over `words`
///
/// The goal is drawn from the bank unless one is given. The player's RNG is
/// derived from the game RNG, so a seed fixes the whole game.
///
/// # Errors
/// Returns an error for an empty bank or a goal that is not one of its words.
pub fn run_auto(
    words: Vec<Word>,
    options: &PlayOptions,
    goal: Option<Word>,
) -> Result<GameSummary, CommandError> {
    let mut rng = options.rng();
    let bank = WordBank::new(words);

    let mut game = match goal {
        Some(goal) => Game::with_goal(bank, goal, options.game)?,
        None => Game::new(bank, options.game, &mut rng)?,
    };

    let mut player = StrategyPlayer::new(
        options.strategy(),
        options.model,
        StdRng::from_rng(&mut rng),
    );

    Ok(game.run(&mut player)?)
}
