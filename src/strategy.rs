//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Strategies only
//! choose among current candidates; correctness of a game never depends on which
//! one is used.

use crate::core::Word;
use crate::likelihood::{LetterScope, ProbabilityModel};
use rand::RngCore;
use rand::prelude::IndexedRandom;
use std::fmt;

/// A strategy for selecting the next guess from the current candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(
        &mut self,
        candidates: &'a [Word],
        model: &dyn ProbabilityModel,
        scope: LetterScope,
        rng: &mut dyn RngCore,
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Most likely word under the model (default)
    MaxLikelihood(MaxLikelihoodStrategy),
    /// Least likely word under the model
    MinLikelihood(MinLikelihoodStrategy),
    /// Alternate most and least likely, starting with most
    Alternating(AlternatingStrategy),
    /// Uniformly random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &mut self,
        candidates: &'a [Word],
        model: &dyn ProbabilityModel,
        scope: LetterScope,
        rng: &mut dyn RngCore,
    ) -> Option<&'a Word> {
        match self {
            Self::MaxLikelihood(s) => s.select_guess(candidates, model, scope, rng),
            Self::MinLikelihood(s) => s.select_guess(candidates, model, scope, rng),
            Self::Alternating(s) => s.select_guess(candidates, model, scope, rng),
            Self::Random(s) => s.select_guess(candidates, model, scope, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "max", "min", "alternating", "random".
    /// Defaults to max-likelihood if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "min" | "min-likelihood" => Self::MinLikelihood(MinLikelihoodStrategy),
            "alternating" | "alt" => Self::Alternating(AlternatingStrategy::default()),
            "random" => Self::Random(RandomStrategy),
            _ => Self::MaxLikelihood(MaxLikelihoodStrategy),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MaxLikelihood(_) => "max-likelihood",
            Self::MinLikelihood(_) => "min-likelihood",
            Self::Alternating(_) => "alternating",
            Self::Random(_) => "random",
        };
        f.write_str(name)
    }
}

/// Index of the best score, keeping the earliest on ties
fn best_index(scores: &[f64], prefer_higher: bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &score) in scores.iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, current)) if prefer_higher => score > current,
            Some((_, current)) => score < current,
        };
        if better {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| i)
}

fn select_extreme<'a>(
    candidates: &'a [Word],
    model: &dyn ProbabilityModel,
    scope: LetterScope,
    prefer_higher: bool,
) -> Option<&'a Word> {
    let scores = model.score_all(candidates, scope);
    best_index(&scores, prefer_higher).map(|i| &candidates[i])
}

/// Picks the highest-scoring candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLikelihoodStrategy;

impl Strategy for MaxLikelihoodStrategy {
    fn select_guess<'a>(
        &mut self,
        candidates: &'a [Word],
        model: &dyn ProbabilityModel,
        scope: LetterScope,
        _rng: &mut dyn RngCore,
    ) -> Option<&'a Word> {
        select_extreme(candidates, model, scope, true)
    }
}

/// Picks the lowest-scoring candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLikelihoodStrategy;

impl Strategy for MinLikelihoodStrategy {
    fn select_guess<'a>(
        &mut self,
        candidates: &'a [Word],
        model: &dyn ProbabilityModel,
        scope: LetterScope,
        _rng: &mut dyn RngCore,
    ) -> Option<&'a Word> {
        select_extreme(candidates, model, scope, false)
    }
}

/// Alternates between max- and min-likelihood picks
#[derive(Debug, Clone, Default)]
pub struct AlternatingStrategy {
    turn: usize,
}

impl Strategy for AlternatingStrategy {
    fn select_guess<'a>(
        &mut self,
        candidates: &'a [Word],
        model: &dyn ProbabilityModel,
        scope: LetterScope,
        _rng: &mut dyn RngCore,
    ) -> Option<&'a Word> {
        let prefer_higher = self.turn % 2 == 0;
        let guess = select_extreme(candidates, model, scope, prefer_higher)?;
        self.turn += 1;
        Some(guess)
    }
}

/// Random strategy
///
/// Ignores the model and picks uniformly from the candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &mut self,
        candidates: &'a [Word],
        _model: &dyn ProbabilityModel,
        _scope: LetterScope,
        rng: &mut dyn RngCore,
    ) -> Option<&'a Word> {
        candidates.choose(rng)
    }
}
