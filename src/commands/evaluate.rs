//! Evaluate command
//!
//! Scores one guess against a target as the first row of a fresh round.

use crate::core::{Evaluation, Word};
use crate::game::{Game, Key, KeyOutcome, RowCost, SubmitOutcome, Validity};
use anyhow::{Context, Result, bail};

/// Result of evaluating a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationReport {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
    pub cost: RowCost,
    pub score: u32,
}

/// Evaluate `guess` against `target` in a fresh round
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn evaluate_guess(guess: &str, target: &str) -> Result<EvaluationReport> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;

    let mut game = Game::new(target.clone());
    for &letter in guess.chars() {
        game.handle_key(Key::Letter(letter));
    }
    let KeyOutcome::Validate(ticket) = game.handle_key(Key::Enter) else {
        bail!("Guess '{guess}' was not submitted");
    };

    match game.complete_validation(&ticket, Validity::Valid) {
        SubmitOutcome::Accepted {
            evaluation, cost, ..
        } => Ok(EvaluationReport {
            guess,
            target,
            evaluation,
            cost,
            score: game.score(),
        }),
        other => bail!("Guess '{guess}' was not accepted: {other:?}"),
    }
}
