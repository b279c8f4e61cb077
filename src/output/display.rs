//! Display functions for command results

use super::formatters::{
    colored_feedback, colored_turn, create_progress_bar, letter_matrix_table,
};
use crate::bank::WordBank;
use crate::commands::BenchmarkResult;
use crate::core::{Feedback, Word};
use crate::game::GameSummary;
use colored::Colorize;

/// Print the board of a finished strategy game
pub fn print_game_summary(summary: &GameSummary, strategy: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Strategy: {}", strategy.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in summary.history.iter().enumerate() {
        println!("Turn {}: {}", i + 1, colored_turn(turn));
    }

    print_result(summary);
}

/// Print the closing line of a game
pub fn print_result(summary: &GameSummary) {
    println!();
    if summary.won {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", summary.guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{} The word was {}",
            format!("❌ Not solved after {} guesses.", summary.guesses())
                .red()
                .bold(),
            summary.goal.text().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print the feedback for one goal/guess pair
pub fn print_score(goal: &Word, guess: &Word, feedback: &Feedback) {
    println!(
        "{} vs {}",
        guess.text().to_uppercase().bold(),
        goal.text().to_uppercase().bold()
    );
    println!(
        "{}  {}  {feedback}",
        colored_feedback(feedback),
        feedback.to_emoji()
    );
}

/// Print the remaining candidates, at most `limit` of them
pub fn print_candidates(bank: &WordBank, limit: usize) {
    let total = bank.len();
    if total == 0 {
        println!(
            "{}",
            "❌ No candidates remain! The feedback may be incorrect.".red()
        );
        return;
    }

    println!(
        "{} of {} candidates remain:",
        total.to_string().bright_yellow().bold(),
        bank.original().len()
    );
    for word in bank.iter().take(limit) {
        println!("  • {}", word.text().to_uppercase());
    }
    if total > limit {
        println!("  … and {} more", total - limit);
    }
}

/// Print how often each letter occurs at each position among the candidates
pub fn print_letter_matrix(bank: &WordBank) {
    if bank.is_empty() {
        return;
    }
    println!("\n{}", "Letters by position:".bright_cyan().bold());
    println!("{}", letter_matrix_table(&bank.letter_matrix()));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_tries: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    match result.average_guesses() {
        Some(average) => println!("   Average guesses:  {average:.2} (wins only)"),
        None => println!("   Average guesses:  -"),
    }
    println!("   Losses:           {}", result.losses().to_string().red());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let games = result.games.max(1) as f64;
    for guesses in 1..=max_tries {
        let count = result.distribution.get(&guesses).copied().unwrap_or(0);
        let pct = count as f64 / games * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let pct = result.losses() as f64 / games * 100.0;
    println!(
        "   X: {} {:4} ({pct:5.1}%)",
        create_progress_bar(pct, 100.0, 40).red(),
        result.losses()
    );
}
