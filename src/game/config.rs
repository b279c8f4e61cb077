//! Game configuration

/// Tunables for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost
    pub max_tries: usize,
    /// Narrow the bank by feedback after each guess; when false only the
    /// guessed word is removed
    pub filter_bank: bool,
    /// Refit the likelihood model on the narrowed bank before every automatic
    /// guess instead of fitting once on the original bank
    pub recompute_per_turn: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_tries: usize) -> Self {
        Self {
            max_tries,
            filter_bank: true,
            recompute_per_turn: true,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(6)
    }
}
