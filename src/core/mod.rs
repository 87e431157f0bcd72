//! Core domain types for Wordle
//!
//! Words, guess evaluations and cumulative letter states. Everything here is
//! pure and deterministic.

mod evaluation;
mod letters;
mod word;

pub use evaluation::{Evaluation, Outcome};
pub use letters::LetterStates;
pub use word::{WORD_LENGTH, Word, WordError};

/// Number of guess rows in a round
pub const MAX_ROWS: usize = 6;
