//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterStates, Outcome, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows as shown on screen
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One letter as a coloured tile
#[must_use]
pub fn tile(letter: u8, outcome: Outcome) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match outcome {
        Outcome::Correct => text.black().on_green().bold(),
        Outcome::WrongPosition => text.black().on_yellow().bold(),
        Outcome::Incorrect => text.white().on_bright_black().bold(),
    }
}

/// A whole evaluated row as coloured tiles
#[must_use]
pub fn tile_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .chars()
        .iter()
        .zip(evaluation.iter())
        .map(|(&letter, outcome)| tile(letter, outcome).to_string())
        .collect()
}

/// Keyboard hint rows: known letters coloured, unknown letters plain
#[must_use]
pub fn keyboard(states: &LetterStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|letter| match states.get(letter) {
                    Some(outcome) => tile(letter, outcome).to_string(),
                    None => format!(" {} ", char::from(letter)),
                })
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
