//! Terminal output formatting
//!
//! Colored boards and pretty-printed command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_candidates, print_game_summary, print_letter_matrix, print_result,
    print_score,
};
