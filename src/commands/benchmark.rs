//! Benchmark command
//!
//! Plays many seeded strategy games and collects win rate and guess counts.

use super::{CommandError, PlayOptions};
use crate::bank::WordBank;
use crate::core::Word;
use crate::game::{Game, GameSummary, StrategyPlayer};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub games: usize,
    pub wins: usize,
    /// Guesses needed per won game → number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn losses(&self) -> usize {
        self.games - self.wins
    }

    /// Fraction of games won, 0 for an empty run
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        let total: usize = self.distribution.iter().map(|(g, n)| g * n).sum();
        (self.wins > 0).then(|| total as f64 / self.wins as f64)
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        self.games as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Progress bar in the style used by the benchmark command
#[must_use]
pub fn progress_bar(games: usize) -> ProgressBar {
    let pb = ProgressBar::new(games as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

fn play_one(
    words: &[Word],
    options: &PlayOptions,
    seed: u64,
) -> Result<GameSummary, CommandError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(WordBank::new(words.to_vec()), options.game, &mut rng)?;
    let mut player = StrategyPlayer::new(
        options.strategy(),
        options.model,
        StdRng::from_rng(&mut rng),
    );
    Ok(game.run(&mut player)?)
}

/// Run `games` independent games in parallel
///
/// Each game gets its own seed drawn up front from the options' RNG, so a fixed
/// seed reproduces the whole run regardless of thread scheduling.
///
/// # Errors
/// Returns the first game error, e.g. for an empty bank.
pub fn run_benchmark(
    words: &[Word],
    options: &PlayOptions,
    games: usize,
    progress: &ProgressBar,
) -> Result<BenchmarkResult, CommandError> {
    let start = Instant::now();
    let mut rng = options.rng();
    let seeds: Vec<u64> = (0..games).map(|_| rng.random()).collect();

    info!(
        "Benchmarking {games} games with {} over {} words",
        options.strategy(),
        words.len()
    );

    let summaries = seeds
        .par_iter()
        .map(|&seed| {
            let summary = play_one(words, options, seed);
            progress.inc(1);
            summary
        })
        .collect::<Result<Vec<_>, _>>()?;

    progress.finish_with_message("done");

    let mut distribution = BTreeMap::new();
    let mut wins = 0;
    for summary in summaries.iter().filter(|s| s.won) {
        wins += 1;
        *distribution.entry(summary.guesses()).or_insert(0) += 1;
    }

    Ok(BenchmarkResult {
        games,
        wins,
        distribution,
        duration: start.elapsed(),
    })
}
