//! Wordle Simulator
//!
//! A Wordle game engine with exact duplicate-letter feedback, a consistency
//! checker that shares the scoring rules, a shrinking candidate bank, and
//! likelihood-driven automatic players.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::bank::WordBank;
//! use wordle_sim::core::{Word, score};
//!
//! let goal = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let feedback = score(&goal, &guess).unwrap();
//! assert_eq!(feedback.to_string(), "-GGYG");
//!
//! let words = ["crane", "trace", "place", "slate"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut bank = WordBank::new(words);
//! bank.filter(&guess, &feedback).unwrap();
//! assert_eq!(bank.words(), &[goal]);
//! ```

// Words, feedback and consistency
pub mod core;

// Candidate set
pub mod bank;

// Letter-frequency models
pub mod likelihood;

// Guess selection
pub mod strategy;

// Game orchestration
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
