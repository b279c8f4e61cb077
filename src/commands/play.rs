//! Play command
//!
//! A human guesses a random goal word at the terminal. Guesses are read line by
//! line; an empty input stream or `quit` abandons the game.

use super::{CommandError, PlayOptions};
use crate::bank::WordBank;
use crate::core::Word;
use crate::game::{Game, GameError, GameSummary, GuessSource, TurnOutcome};
use crate::output::formatters::colored_turn;
use std::io::{BufRead, Write};

/// Guess source reading from a line-oriented input
pub struct TerminalPlayer<R, W> {
    input: R,
    output: W,
}

fn source_error(e: std::io::Error) -> GameError {
    GameError::Source(e.to_string())
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where prompts and board rows are written
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> GuessSource for TerminalPlayer<R, W> {
    fn next_guess(&mut self, game: &Game) -> Result<Option<Word>, GameError> {
        let length = game.goal().len();

        loop {
            write!(
                self.output,
                "Guess {}/{}: ",
                game.tries() + 1,
                game.config().max_tries
            )
            .map_err(source_error)?;
            self.output.flush().map_err(source_error)?;

            let mut line = String::new();
            if self.input.read_line(&mut line).map_err(source_error)? == 0 {
                return Ok(None);
            }

            let line = line.trim();
            match line {
                "" => continue,
                "quit" | "q" | "exit" => return Ok(None),
                _ => {}
            }

            let rejected = match Word::new(line) {
                Ok(word) if word.len() == length => return Ok(Some(word)),
                Ok(word) => writeln!(
                    self.output,
                    "Guess must have {length} letters, got {}",
                    word.len()
                ),
                Err(e) => writeln!(self.output, "Invalid guess: {e}"),
            };
            rejected.map_err(source_error)?;
        }
    }
}

/// Play one interactive game against a goal drawn from `words`
///
/// Every scored guess is echoed as a row of colored tiles.
///
/// # Errors
/// Returns an error for an empty bank or failed terminal I/O.
pub fn run_play<R: BufRead, W: Write>(
    words: Vec<Word>,
    options: &PlayOptions,
    player: &mut TerminalPlayer<R, W>,
) -> Result<GameSummary, CommandError> {
    let mut rng = options.rng();
    let mut game = Game::new(WordBank::new(words), options.game, &mut rng)?;

    writeln!(
        player.output(),
        "Guess the {}-letter word in {} tries ('quit' to give up)",
        game.goal().len(),
        options.game.max_tries
    )?;

    loop {
        match game.step(player)? {
            TurnOutcome::Continue { .. } | TurnOutcome::Won { .. } => {
                if let Some(turn) = game.history().last() {
                    writeln!(player.output(), "{}", colored_turn(turn))?;
                }
                if game.status().is_terminal() {
                    break;
                }
            }
            TurnOutcome::Lost { .. } | TurnOutcome::NoGuess => break,
        }
    }

    Ok(game.summary())
}
