//! Formatting utilities for terminal output

use crate::core::{FeedbackColor, FeedbackRow, Word};
use colored::{ColoredString, Colorize};

/// One letter styled as a board tile
#[must_use]
pub fn tile(letter: char, color: FeedbackColor) -> ColoredString {
    let text = format!(" {letter} ");
    match color {
        FeedbackColor::Correct => text.black().on_green().bold(),
        FeedbackColor::Present => text.black().on_yellow().bold(),
        FeedbackColor::Absent => text.white().on_red(),
    }
}

/// A guess rendered as a row of colored tiles
#[must_use]
pub fn board_row(word: &Word, feedback: &FeedbackRow) -> String {
    word.letters()
        .iter()
        .zip(feedback.colors())
        .map(|(&letter, &color)| tile(letter, color).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "1 guess", "3 guesses"
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
