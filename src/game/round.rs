//! Round-scoped state
//!
//! Everything that belongs to one target word lives here and is replaced
//! wholesale when a new round starts. Mutation goes through [`super::Game`].

use super::scoring::{RowCost, ScoreBoard, WrongPositionHistory};
use crate::core::{Evaluation, LetterStates, MAX_ROWS, Outcome, WORD_LENGTH, Word};

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Current row accepts letters
    AwaitingInput,
    /// A complete guess is waiting on the dictionary check
    Validating,
    /// An accepted row is being disclosed tile by tile
    Revealing,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One of the six guess rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    guess: Option<Word>,
    evaluation: Option<Evaluation>,
    revealed: [bool; WORD_LENGTH],
    cost: Option<RowCost>,
}

impl Row {
    pub(super) fn submitted(guess: Word, evaluation: Evaluation, cost: RowCost) -> Self {
        Self {
            guess: Some(guess),
            evaluation: Some(evaluation),
            revealed: [false; WORD_LENGTH],
            cost: Some(cost),
        }
    }

    #[must_use]
    pub const fn guess(&self) -> Option<&Word> {
        self.guess.as_ref()
    }

    #[must_use]
    pub const fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    #[must_use]
    pub const fn cost(&self) -> Option<&RowCost> {
        self.cost.as_ref()
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.guess.is_some()
    }

    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed.get(position).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Outcome of a tile, only once it has been revealed
    #[must_use]
    pub fn visible_outcome(&self, position: usize) -> Option<Outcome> {
        if self.is_revealed(position) {
            self.evaluation.map(|e| e.outcome(position))
        } else {
            None
        }
    }

    /// Flip one tile; returns its outcome, or `None` if nothing to flip
    pub(super) fn reveal(&mut self, position: usize) -> Option<Outcome> {
        let evaluation = self.evaluation?;
        let flag = self.revealed.get_mut(position)?;
        *flag = true;
        Some(evaluation.outcome(position))
    }

    pub(super) fn reveal_all(&mut self) {
        if self.evaluation.is_some() {
            self.revealed = [true; WORD_LENGTH];
        }
    }
}

/// State of the round in progress
#[derive(Debug, Clone)]
pub struct Round {
    pub(super) target: Word,
    pub(super) rows: [Row; MAX_ROWS],
    pub(super) current_row: usize,
    pub(super) current_guess: String,
    pub(super) phase: Phase,
    pub(super) invalid_guess: bool,
    pub(super) letter_states: LetterStates,
    pub(super) wrong_positions: WrongPositionHistory,
    pub(super) score: ScoreBoard,
    pub(super) revealed_answer_row: Option<usize>,
    pub(super) clue: Option<String>,
    pub(super) used_suggestions: Vec<Word>,
}

impl Round {
    pub(super) fn new(target: Word) -> Self {
        Self {
            target,
            rows: std::array::from_fn(|_| Row::default()),
            current_row: 0,
            current_guess: String::with_capacity(WORD_LENGTH),
            phase: Phase::AwaitingInput,
            invalid_guess: false,
            letter_states: LetterStates::new(),
            wrong_positions: WrongPositionHistory::new(),
            score: ScoreBoard::new(),
            revealed_answer_row: None,
            clue: None,
            used_suggestions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ROWS] {
        &self.rows
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Letters typed into the current row so far
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_invalid_guess(&self) -> bool {
        self.invalid_guess
    }

    #[must_use]
    pub const fn letter_states(&self) -> &LetterStates {
        &self.letter_states
    }

    #[must_use]
    pub const fn wrong_positions(&self) -> &WrongPositionHistory {
        &self.wrong_positions
    }

    #[must_use]
    pub const fn score(&self) -> &ScoreBoard {
        &self.score
    }

    #[must_use]
    pub const fn revealed_answer_row(&self) -> Option<usize> {
        self.revealed_answer_row
    }

    #[must_use]
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    #[must_use]
    pub fn used_suggestions(&self) -> &[Word] {
        &self.used_suggestions
    }

    /// Submitted guesses with their evaluations, top to bottom
    pub fn submitted(&self) -> impl Iterator<Item = (&Word, &Evaluation)> {
        self.rows
            .iter()
            .filter_map(|row| Some((row.guess()?, row.evaluation()?)))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }
}
