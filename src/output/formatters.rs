//! Formatting utilities for terminal output

use crate::core::{ALPHABET, Feedback, LetterState, Tile};
use crate::game::Turn;
use colored::{ColoredString, Colorize};

/// One tile as an uppercase letter on its state's background color
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let text = format!(" {} ", char::from(tile.letter).to_ascii_uppercase());
    match tile.state {
        LetterState::Green => text.black().on_green().bold(),
        LetterState::Yellow => text.black().on_yellow().bold(),
        LetterState::Grey => text.white().on_bright_black(),
    }
}

/// A full row of colored tiles
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .tiles()
        .iter()
        .map(|&tile| colored_tile(tile).to_string())
        .collect()
}

/// Board row for a played turn: tiles, emoji pattern and remaining candidates
#[must_use]
pub fn colored_turn(turn: &Turn) -> String {
    let remaining = match turn.remaining {
        1 => "1 candidate left".to_string(),
        n => format!("{n} candidates left"),
    };
    format!(
        "{}  {}  {}",
        colored_feedback(&turn.feedback),
        turn.feedback.to_emoji(),
        remaining.bright_black()
    )
}

/// Letter-by-position counts as a table, one row per letter that occurs
///
/// `matrix` is indexed `[letter][position]` as produced by
/// [`WordBank::letter_matrix`](crate::bank::WordBank::letter_matrix).
#[must_use]
pub fn letter_matrix_table(matrix: &[Vec<usize>]) -> String {
    let width = matrix.first().map_or(0, Vec::len);
    let mut lines = vec![format!(
        "   {}",
        (1..=width).map(|p| format!("{p:>4}")).collect::<String>()
    )];

    for (&letter, row) in ALPHABET.iter().zip(matrix) {
        if row.iter().all(|&count| count == 0) {
            continue;
        }
        let cells: String = row.iter().map(|count| format!("{count:>4}")).collect();
        lines.push(format!("{}: {cells}", char::from(letter).to_ascii_uppercase()));
    }

    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
