//! Turn-based game state machine
//!
//! `AwaitingGuess` → (scored) → `AwaitingGuess` | `Won` | `Lost`. Scoring and
//! the following status decision happen within one call, so the scored state
//! is never observable from outside.

use super::{GameConfig, GameError, GuessSource};
use crate::bank::WordBank;
use crate::core::{EngineError, Feedback, Word, score};
use log::{debug, info, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Lifecycle state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingGuess,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidates left in the bank after this turn
    pub remaining: usize,
}

/// What a turn resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Scored and not solved; carries the number of candidates left
    Continue { remaining: usize },
    Won { tries: usize },
    /// Out of tries; the goal is revealed
    Lost { goal: Word },
    /// The source had nothing to offer; the game is unchanged
    NoGuess,
}

/// Final report of a finished or abandoned game
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub won: bool,
    pub goal: Word,
    pub history: Vec<Turn>,
}

impl GameSummary {
    /// Number of scored guesses
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.history.len()
    }
}

/// A single Wordle game
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    bank: WordBank,
    goal: Word,
    history: Vec<Turn>,
    tries: usize,
    status: GameStatus,
}

impl Game {
    /// Start a game with a goal drawn uniformly from the bank's original words
    ///
    /// # Errors
    /// Returns `GameError::EmptyBank` if the bank has no words.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_sim::bank::WordBank;
    /// use wordle_sim::core::Word;
    /// use wordle_sim::game::{Game, GameConfig};
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let game = Game::new(WordBank::new(words), GameConfig::default(), &mut rng).unwrap();
    /// assert_eq!(game.tries(), 0);
    /// ```
    pub fn new<R: Rng + ?Sized>(
        bank: WordBank,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let goal = bank
            .original()
            .choose(rng)
            .cloned()
            .ok_or(GameError::EmptyBank)?;
        Self::with_goal(bank, goal, config)
    }

    /// Start a game with a known goal
    ///
    /// # Errors
    /// Returns `EmptyBank` for an empty bank, `LengthMismatch` if the goal's
    /// length differs from the bank's words, or `GoalNotInBank` if the goal is
    /// not one of the bank's original words.
    pub fn with_goal(bank: WordBank, goal: Word, config: GameConfig) -> Result<Self, GameError> {
        let length = bank.word_length().ok_or(GameError::EmptyBank)?;
        if goal.len() != length {
            return Err(EngineError::LengthMismatch {
                expected: length,
                found: goal.len(),
            }
            .into());
        }
        if !bank.original().contains(&goal) {
            return Err(GameError::GoalNotInBank(goal.text().to_string()));
        }

        info!(
            "Game started: {} words, {} tries, filter_bank={}, recompute_per_turn={}",
            bank.len(),
            config.max_tries,
            config.filter_bank,
            config.recompute_per_turn
        );
        debug!("Goal word: {goal}");

        Ok(Self {
            config,
            bank,
            goal,
            history: Vec::new(),
            tries: 0,
            status: GameStatus::AwaitingGuess,
        })
    }

    /// Submit a guess for the current turn
    ///
    /// Once the try counter exceeds `max_tries` the game is lost and the guess is
    /// not scored.
    ///
    /// # Errors
    /// Returns `Finished` after the game has ended, or `LengthMismatch` if the
    /// guess length differs from the goal (the turn is not counted).
    pub fn submit_guess(&mut self, guess: Word) -> Result<TurnOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Finished);
        }

        if self.tries + 1 > self.config.max_tries {
            return Ok(self.lose());
        }

        let feedback = score(&self.goal, &guess)?;
        self.tries += 1;
        info!("Guess {}: {guess} {feedback}", self.tries);

        if self.config.filter_bank {
            self.bank.filter(&guess, &feedback)?;
        } else if let Err(e) = self.bank.remove(&guess) {
            debug!("{e}");
        }

        let remaining = self.bank.len();
        debug!("{remaining} candidates remain");

        let solved = feedback.is_perfect();
        self.history.push(Turn {
            guess,
            feedback,
            remaining,
        });

        if solved {
            self.status = GameStatus::Won;
            info!("Got the goal word after {} tries", self.tries);
            return Ok(TurnOutcome::Won { tries: self.tries });
        }

        if self.bank.is_empty() {
            warn!("No candidates remain; feedback so far rules out every word in the bank");
        }

        Ok(TurnOutcome::Continue { remaining })
    }

    /// Play one turn with guesses from `source`
    ///
    /// The source is not consulted for a turn that is already past the limit.
    ///
    /// # Errors
    /// Propagates errors from the source and from [`submit_guess`](Self::submit_guess).
    pub fn step<G: GuessSource + ?Sized>(
        &mut self,
        source: &mut G,
    ) -> Result<TurnOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Finished);
        }

        if self.tries + 1 > self.config.max_tries {
            return Ok(self.lose());
        }

        match source.next_guess(self)? {
            Some(guess) => self.submit_guess(guess),
            None => Ok(TurnOutcome::NoGuess),
        }
    }

    /// Play until the game ends or the source gives up
    ///
    /// # Errors
    /// Propagates the first error from [`step`](Self::step).
    pub fn run<G: GuessSource + ?Sized>(
        &mut self,
        source: &mut G,
    ) -> Result<GameSummary, GameError> {
        while !self.status.is_terminal() {
            if self.step(source)? == TurnOutcome::NoGuess {
                warn!("Guess source gave up after {} tries", self.tries);
                break;
            }
        }
        Ok(self.summary())
    }

    fn lose(&mut self) -> TurnOutcome {
        self.tries += 1;
        self.status = GameStatus::Lost;
        info!(
            "Game over, failed to get goal word: {}",
            self.goal.text().to_uppercase()
        );
        TurnOutcome::Lost {
            goal: self.goal.clone(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            won: self.status == GameStatus::Won,
            goal: self.goal.clone(),
            history: self.history.clone(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current candidate bank
    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Goal word; intended for presentation after the game ends and for diagnostics
    #[must_use]
    pub const fn goal(&self) -> &Word {
        &self.goal
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Feedback of the most recent scored guess
    #[must_use]
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.history.last().map(|turn| &turn.feedback)
    }

    /// Try counter, including a final over-the-limit attempt that lost the game
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedPlayer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn bank(list: &[&str]) -> WordBank {
        WordBank::new(list.iter().map(|s| w(s)).collect())
    }

    fn crane_game(config: GameConfig) -> Game {
        Game::with_goal(bank(&["crane", "trace", "place", "slate"]), w("crane"), config).unwrap()
    }

    #[test]
    fn goal_is_drawn_from_bank() {
        let list = ["crane", "trace", "place", "slate"];
        let mut rng = StdRng::seed_from_u64(3);
        let game = Game::new(bank(&list), GameConfig::default(), &mut rng).unwrap();
        assert!(list.contains(&game.goal().text()));
        assert_eq!(game.status(), GameStatus::AwaitingGuess);
    }

    #[test]
    fn same_seed_same_goal() {
        let list = ["crane", "trace", "place", "slate", "grace", "brain"];
        let config = GameConfig::default();
        let a = Game::new(bank(&list), config, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = Game::new(bank(&list), config, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.goal(), b.goal());
    }

    #[test]
    fn empty_bank_cannot_start() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Game::new(WordBank::default(), GameConfig::default(), &mut rng),
            Err(GameError::EmptyBank)
        ));
    }

    #[test]
    fn goal_length_must_match_bank() {
        assert!(matches!(
            Game::with_goal(bank(&["crane"]), w("cranes"), GameConfig::default()),
            Err(GameError::Engine(EngineError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn miss_then_win() {
        let mut game = crane_game(GameConfig::default());

        let outcome = game.submit_guess(w("trace")).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue { remaining: 1 });
        assert_eq!(game.last_feedback().unwrap().to_string(), "-GGYG");
        assert_eq!(game.bank().words(), &[w("crane")]);

        let outcome = game.submit_guess(w("crane")).unwrap();
        assert_eq!(outcome, TurnOutcome::Won { tries: 2 });
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn no_guesses_after_terminal() {
        let mut game = crane_game(GameConfig::default());
        game.submit_guess(w("crane")).unwrap();
        assert_eq!(game.submit_guess(w("slate")), Err(GameError::Finished));
    }

    #[test]
    fn lost_after_exceeding_max_tries() {
        let mut game = crane_game(GameConfig::new(2));

        assert!(matches!(
            game.submit_guess(w("slate")).unwrap(),
            TurnOutcome::Continue { .. }
        ));
        assert!(matches!(
            game.submit_guess(w("place")).unwrap(),
            TurnOutcome::Continue { .. }
        ));

        // Third submission exceeds the limit and is not scored
        let outcome = game.submit_guess(w("crane")).unwrap();
        assert_eq!(outcome, TurnOutcome::Lost { goal: w("crane") });
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.tries(), 3);
    }

    #[test]
    fn length_mismatch_does_not_count_a_try() {
        let mut game = crane_game(GameConfig::default());
        assert!(matches!(
            game.submit_guess(w("cranes")),
            Err(GameError::Engine(EngineError::LengthMismatch { .. }))
        ));
        assert_eq!(game.tries(), 0);
    }

    #[test]
    fn goal_must_be_an_original_bank_word() {
        assert_eq!(
            Game::with_goal(
                bank(&["crane", "trace", "place", "slate", "fuzzy"]),
                w("zzzzz"),
                GameConfig::default()
            )
            .unwrap_err(),
            GameError::GoalNotInBank("zzzzz".to_string())
        );
    }

    #[test]
    fn guess_outside_the_bank_still_filters() {
        let mut game = Game::with_goal(bank(&["crane", "slate"]), w("crane"), GameConfig::default())
            .unwrap();
        let outcome = game.submit_guess(w("trace")).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue { remaining: 1 });
        assert!(game.bank().contains(&w("crane")));
    }

    #[test]
    fn remove_only_mode_drops_just_the_guess() {
        let config = GameConfig {
            filter_bank: false,
            ..GameConfig::default()
        };
        let mut game = crane_game(config);

        game.submit_guess(w("trace")).unwrap();
        assert_eq!(game.bank().len(), 3);
        assert!(!game.bank().contains(&w("trace")));

        // Not in the bank: logged and ignored
        game.submit_guess(w("brain")).unwrap();
        assert_eq!(game.bank().len(), 3);
    }

    #[test]
    fn step_does_not_consult_source_past_the_limit() {
        let mut game = crane_game(GameConfig::new(1));
        let mut player = ScriptedPlayer::new(vec![w("slate"), w("place")]);

        assert!(matches!(
            game.step(&mut player).unwrap(),
            TurnOutcome::Continue { .. }
        ));
        assert_eq!(
            game.step(&mut player).unwrap(),
            TurnOutcome::Lost { goal: w("crane") }
        );
        assert_eq!(player.remaining(), 1);
    }

    #[test]
    fn run_stops_when_source_is_exhausted() {
        let mut game = crane_game(GameConfig::default());
        let mut player = ScriptedPlayer::new(vec![w("slate")]);

        let summary = game.run(&mut player).unwrap();
        assert!(!summary.won);
        assert_eq!(summary.guesses(), 1);
        assert_eq!(game.status(), GameStatus::AwaitingGuess);
    }

    #[test]
    fn run_to_win() {
        let mut game = crane_game(GameConfig::default());
        let mut player = ScriptedPlayer::new(vec![w("slate"), w("trace"), w("crane")]);

        let summary = game.run(&mut player).unwrap();
        assert!(summary.won);
        assert_eq!(summary.goal, w("crane"));
        assert_eq!(summary.guesses(), 3);
        assert!(
            summary
                .history
                .windows(2)
                .all(|t| t[1].remaining <= t[0].remaining)
        );
    }
}
