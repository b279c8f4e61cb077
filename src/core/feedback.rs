//! Wordle feedback calculation and representation
//!
//! Feedback is the sequence of colored tiles produced by scoring a guess against
//! the goal word. Each tile keeps the guessed letter, so a feedback value always
//! describes exactly one guess.

use super::{EngineError, LetterState, Word};
use std::fmt;

/// One scored letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: u8,
    pub state: LetterState,
}

/// Ordered per-letter feedback for a guess
///
/// Invariant: `tiles[i].letter == guess[i]` for the guess it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    tiles: Vec<Tile>,
}

/// Error type for unparseable feedback patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackParseError {
    WrongLength { expected: usize, found: usize },
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, found } => {
                write!(f, "Pattern must have {expected} symbols, got {found}")
            }
            Self::InvalidSymbol(symbol) => {
                write!(f, "Invalid pattern symbol '{symbol}' (use G, Y or -)")
            }
        }
    }
}

impl std::error::Error for FeedbackParseError {}

/// Score `guess` against `goal`
///
/// Implements Wordle's exact feedback rules, including duplicate letters.
///
/// # Algorithm
/// 1. Build a remaining-count pool from the goal's letters
/// 2. First pass: mark exact matches green and remove them from the pool
/// 3. Second pass: left to right, mark unmarked letters yellow while the pool still has them
/// 4. Everything left is grey
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_sim::core::{LetterState, Word, score};
///
/// let goal = Word::new("sassy").unwrap();
/// let guess = Word::new("assai").unwrap();
/// let feedback = score(&goal, &guess).unwrap();
///
/// // Only one 'a' in the goal, so only the first guessed 'a' is yellow
/// assert_eq!(feedback.to_string(), "YYG--");
/// assert_eq!(feedback.count(LetterState::Yellow), 2);
/// ```
pub fn score(goal: &Word, guess: &Word) -> Result<Feedback, EngineError> {
    if goal.len() != guess.len() {
        return Err(EngineError::LengthMismatch {
            expected: goal.len(),
            found: guess.len(),
        });
    }

    let tiles = guess
        .letters()
        .iter()
        .zip(score_states(goal, guess))
        .map(|(&letter, state)| Tile { letter, state })
        .collect();

    Ok(Feedback { tiles })
}

/// The three-pass scoring routine shared by `score` and the consistency checker
///
/// Callers guarantee equal lengths.
pub(crate) fn score_states(goal: &Word, guess: &Word) -> Vec<LetterState> {
    debug_assert_eq!(goal.len(), guess.len());

    let mut states = vec![LetterState::Grey; guess.len()];
    let mut marked = vec![false; guess.len()];
    let mut available = goal.char_counts();

    // Greens first so they claim their letters before any yellow can
    for (i, (&g, &a)) in guess.letters().iter().zip(goal.letters()).enumerate() {
        if g == a {
            states[i] = LetterState::Green;
            marked[i] = true;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if marked[i] {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            states[i] = LetterState::Yellow;
            *count -= 1;
        }
    }

    states
}

impl Feedback {
    /// Build feedback for `guess` from explicit states
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the number of states differs from the guess length.
    pub fn from_states(guess: &Word, states: &[LetterState]) -> Result<Self, EngineError> {
        if states.len() != guess.len() {
            return Err(EngineError::LengthMismatch {
                expected: guess.len(),
                found: states.len(),
            });
        }

        let tiles = guess
            .letters()
            .iter()
            .zip(states)
            .map(|(&letter, &state)| Tile { letter, state })
            .collect();

        Ok(Self { tiles })
    }

    /// Parse a pattern like "GY-G-" or "🟩🟨⬜🟩⬜" observed for `guess`
    ///
    /// # Errors
    /// Returns `FeedbackParseError` on a length mismatch or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let a = Feedback::parse(&guess, "GY-x_").unwrap();
    /// let b = Feedback::parse(&guess, "🟩🟨⬜⬜⬜").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(guess: &Word, pattern: &str) -> Result<Self, FeedbackParseError> {
        let states = pattern
            .trim()
            .chars()
            .map(|c| LetterState::from_symbol(c).ok_or(FeedbackParseError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_states(guess, &states).map_err(|_| FeedbackParseError::WrongLength {
            expected: guess.len(),
            found: states.len(),
        })
    }

    /// The tiles in guess order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over the tile states
    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.tiles.iter().map(|t| t.state)
    }

    /// The guessed word these tiles spell, lowercase
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.tiles.iter().map(|t| char::from(t.letter)).collect()
    }

    /// Check if every tile is green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.tiles.iter().all(|t| t.state == LetterState::Green)
    }

    /// Count tiles in the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }

    /// Check that these tiles carry exactly the letters of `guess`
    ///
    /// # Errors
    /// Returns `LengthMismatch` or `LetterMismatch` describing the first disagreement.
    pub fn check_describes(&self, guess: &Word) -> Result<(), EngineError> {
        if self.len() != guess.len() {
            return Err(EngineError::LengthMismatch {
                expected: guess.len(),
                found: self.len(),
            });
        }

        match self
            .tiles
            .iter()
            .zip(guess.letters())
            .position(|(tile, &letter)| tile.letter != letter)
        {
            Some(position) => Err(EngineError::LetterMismatch {
                position,
                expected: char::from(guess.char_at(position)),
                found: char::from(self.tiles[position].letter),
            }),
            None => Ok(()),
        }
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states().map(LetterState::emoji).collect()
    }
}

impl fmt::Display for Feedback {
    /// Writes the pattern form, e.g. "GY-G-"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self.states().map(LetterState::symbol).collect();
        f.write_str(&pattern)
    }
}
