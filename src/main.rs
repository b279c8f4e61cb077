//! Wordle Simulator - CLI
//!
//! Play Wordle at the terminal, watch strategies play it, or use the feedback
//! engine directly to score guesses and narrow a word bank.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_sim::{
    commands::{
        Observation, PlayOptions, SiftOptions, TerminalPlayer, benchmark, filter_words,
        load_bank, run_auto, run_benchmark, run_play, run_sift, score_words,
    },
    core::Word,
    game::GameConfig,
    likelihood::{LetterScope, ModelConfig, ModelKind},
    output::{
        print_benchmark_result, print_candidates, print_game_summary, print_letter_matrix,
        print_result, print_score,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Wordle simulator with exact duplicate-letter feedback and candidate filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: max (default), min, alternating, random
    #[arg(short, long, global = true, default_value = "max")]
    strategy: String,

    /// Likelihood model: set (letter counts) or position (per-position counts)
    #[arg(short, long, global = true, default_value = "set")]
    model: ModelKind,

    /// Letters that contribute to a word's likelihood: all, vowels, consonants
    #[arg(long, global = true, default_value = "all")]
    scope: LetterScope,

    /// Word bank: built-in name ('five') or path to a newline-separated file
    #[arg(short, long, global = true, default_value = "five")]
    bank: String,

    /// Guesses allowed per game
    #[arg(short = 't', long, global = true, default_value = "6")]
    max_tries: usize,

    /// Seed for reproducible goals and strategy choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Only remove the guessed word after a miss instead of filtering by feedback
    #[arg(long, global = true)]
    no_filter: bool,

    /// Fit the likelihood model once on the full bank instead of every turn
    #[arg(long, global = true)]
    stale_model: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a random word at the terminal (default)
    Play,

    /// Let a strategy play one game
    Auto {
        /// Goal word (default: random from the bank)
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Score a guess against a goal
    Score { goal: String, guess: String },

    /// Narrow the bank with observed feedback, e.g. `crane:-Y--G slate:GG---`
    Filter {
        #[arg(required = true)]
        observations: Vec<Observation>,

        /// Maximum number of candidates to list
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Also show letter counts per position among the remaining candidates
        #[arg(long)]
        matrix: bool,
    },

    /// Play many strategy games and report statistics
    Benchmark {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },

    /// Build a word bank from a raw dictionary
    Sift {
        input: PathBuf,
        output: PathBuf,

        /// Keep only words of this length
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Drop words with repeated letters
        #[arg(short, long)]
        unique: bool,
    },
}

impl Cli {
    fn play_options(&self) -> PlayOptions {
        PlayOptions {
            game: GameConfig {
                max_tries: self.max_tries,
                filter_bank: !self.no_filter,
                recompute_per_turn: !self.stale_model,
            },
            model: ModelConfig {
                kind: self.model,
                scope: self.scope,
            },
            strategy: self.strategy.clone(),
            seed: self.seed,
        }
    }

    fn words(&self) -> Result<Vec<Word>> {
        load_bank(&self.bank).with_context(|| format!("Failed to load word bank '{}'", self.bank))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let options = cli.play_options();

    match command {
        Commands::Play => {
            let stdin = io::stdin();
            let mut player = TerminalPlayer::new(stdin.lock(), io::stdout());
            let summary = run_play(cli.words()?, &options, &mut player)?;
            print_result(&summary);
        }
        Commands::Auto { goal } => {
            let goal = goal
                .map(Word::new)
                .transpose()
                .context("Invalid goal word")?;
            let summary = run_auto(cli.words()?, &options, goal)?;
            print_game_summary(&summary, &options.strategy().to_string());
        }
        Commands::Score { goal, guess } => {
            let (goal, guess, feedback) = score_words(&goal, &guess)?;
            print_score(&goal, &guess, &feedback);
        }
        Commands::Filter {
            observations,
            limit,
            matrix,
        } => {
            let bank = filter_words(cli.words()?, &observations)?;
            print_candidates(&bank, limit);
            if matrix {
                print_letter_matrix(&bank);
            }
        }
        Commands::Benchmark { games } => {
            let words = cli.words()?;
            println!(
                "Running {games} games with {} over {} words...",
                options.strategy(),
                words.len()
            );
            let progress = benchmark::progress_bar(games);
            let result = run_benchmark(&words, &options, games, &progress)?;
            print_benchmark_result(&result, options.game.max_tries);
        }
        Commands::Sift {
            input,
            output,
            length,
            unique,
        } => {
            let written = run_sift(&SiftOptions {
                input,
                output: output.clone(),
                length,
                unique,
            })?;
            println!("Wrote {written} words to {}", output.display());
        }
    }

    Ok(())
}
