//! Score deductions, per-round score and session standing
//!
//! A round starts at [`STARTING_SCORE`] and every submitted row costs points
//! for the information it reveals. Only new information costs: a letter
//! already known to be correct, a wrong-position placement already seen, or
//! an absent letter already ruled out is free.

use crate::core::{Evaluation, LetterStates, MAX_ROWS, Outcome, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Score every round starts with
pub const STARTING_SCORE: u32 = 50;
/// Cost of discovering a letter in its correct position
pub const CORRECT_COST: u32 = 5;
/// Cost of discovering a new wrong-position placement
pub const WRONG_POSITION_COST: u32 = 3;
/// Cost of ruling out a previously unseen letter
pub const INCORRECT_COST: u32 = 1;

/// Positions at which each letter has been seen in the wrong place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrongPositionHistory {
    positions: FxHashMap<u8, FxHashSet<usize>>,
}

impl WrongPositionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, letter: u8, position: usize) -> bool {
        self.positions
            .get(&letter)
            .is_some_and(|set| set.contains(&position))
    }

    /// Record a (letter, position) pair, returning `true` if it was new
    pub fn record(&mut self, letter: u8, position: usize) -> bool {
        self.positions.entry(letter).or_default().insert(position)
    }

    /// All recorded pairs, sorted by letter then position
    #[must_use]
    pub fn pairs(&self) -> Vec<(u8, usize)> {
        let mut pairs: Vec<(u8, usize)> = self
            .positions
            .iter()
            .flat_map(|(&letter, set)| set.iter().map(move |&pos| (letter, pos)))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.values().map(FxHashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Point cost of each position of one submitted row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCost([u32; WORD_LENGTH]);

impl RowCost {
    pub const ZERO: Self = Self([0; WORD_LENGTH]);

    #[must_use]
    pub const fn costs(&self) -> &[u32; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub const fn cost(&self, position: usize) -> u32 {
        self.0[position]
    }

    /// Total deduction for the row
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// Compute the cost of a row against the state *before* the guess
///
/// Letter states are copied and updated left to right so a letter repeated
/// within the row is only charged once. New wrong-position pairs are
/// written into `history`.
#[must_use]
pub fn row_cost(
    guess: &Word,
    evaluation: &Evaluation,
    letter_states: &LetterStates,
    history: &mut WrongPositionHistory,
) -> RowCost {
    let mut working = letter_states.clone();
    let mut costs = [0u32; WORD_LENGTH];

    for (position, (&letter, outcome)) in guess.chars().iter().zip(evaluation.iter()).enumerate()
    {
        costs[position] = match outcome {
            Outcome::Correct => {
                if working.get(letter) == Some(Outcome::Correct) {
                    0
                } else {
                    CORRECT_COST
                }
            }
            Outcome::WrongPosition => {
                if history.record(letter, position) {
                    WRONG_POSITION_COST
                } else {
                    0
                }
            }
            Outcome::Incorrect => {
                if working.get(letter).is_none() {
                    INCORRECT_COST
                } else {
                    0
                }
            }
        };
        working.record(letter, outcome);
    }

    RowCost(costs)
}

/// Score of the round in progress plus a snapshot per submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    row_scores: [Option<u32>; MAX_ROWS],
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: STARTING_SCORE,
            row_scores: [None; MAX_ROWS],
        }
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Score recorded after the given row was submitted
    #[must_use]
    pub fn row_score(&self, row: usize) -> Option<u32> {
        self.row_scores.get(row).copied().flatten()
    }

    /// Deduct a row's cost (clamped at zero) and snapshot the result
    pub fn apply(&mut self, row: usize, cost: &RowCost) -> u32 {
        self.score = self.score.saturating_sub(cost.total());
        if let Some(slot) = self.row_scores.get_mut(row) {
            *slot = Some(self.score);
        }
        self.score
    }
}

/// Session-wide results carried across rounds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Standing {
    pub total_score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub rounds_played: u32,
    pub rounds_won: u32,
    /// Wins by number of rows used (index 1-6)
    pub win_distribution: [u32; MAX_ROWS + 1],
}

impl Standing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank a won round: extend the streak and add the round score
    pub fn record_win(&mut self, score: u32, rows_used: usize) {
        self.rounds_played += 1;
        self.rounds_won += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
        self.total_score += score;
        if let Some(slot) = self.win_distribution.get_mut(rows_used) {
            *slot += 1;
        }
    }

    /// Close a lost round: the streak ends, nothing is banked
    pub fn record_loss(&mut self) {
        self.rounds_played += 1;
        self.streak = 0;
    }

    /// End the streak without closing a round (abandoned round, new game)
    pub fn break_streak(&mut self) {
        self.streak = 0;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            f64::from(self.rounds_won) / f64::from(self.rounds_played)
        }
    }
}
