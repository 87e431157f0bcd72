//! Simulation command
//!
//! Plays whole rounds with the suggestion filter as the player: every turn
//! takes the first word consistent with what the round has revealed so far.

use crate::core::{MAX_ROWS, Word};
use crate::game::{Game, KeyOutcome, Standing, SubmitOutcome, Transition, Validity};
use crate::suggest::{Constraints, suggest};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Options for a simulation run
#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    /// Play at most this many targets
    pub limit: Option<usize>,
    /// Use this word as every opening guess
    pub first_word: Option<Word>,
    /// Shuffle the target order with this seed
    pub seed: Option<u64>,
}

/// Outcome of one simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub target: Word,
    pub guesses: Vec<Word>,
    pub won: bool,
    pub score: u32,
}

/// Aggregate results of a simulation
#[derive(Debug)]
pub struct SimulationStatistics {
    pub rounds: Vec<RoundResult>,
    /// Standing after playing the rounds in order
    pub standing: Standing,
    pub average_score: f64,
    pub average_guesses: f64,
    pub total_time: Duration,
}

/// Play one round against `target` using the suggestion filter
#[must_use]
pub fn play_round(target: &Word, words: &[Word], first_word: Option<&Word>) -> RoundResult {
    let mut game = Game::new(target.clone());
    let mut guesses = Vec::new();

    for row in 0..MAX_ROWS {
        let constraints = Constraints::from_rows(game.round().submitted());
        let guess = match (row, first_word) {
            (0, Some(first)) => first.clone(),
            _ => match suggest(&constraints, &guesses, words).first() {
                Some(&word) => word.clone(),
                None => break,
            },
        };

        let KeyOutcome::Validate(ticket) = game.apply_suggestion(&guess) else {
            break;
        };
        let SubmitOutcome::Accepted { schedule, .. } =
            game.complete_validation(&ticket, Validity::Valid)
        else {
            break;
        };
        guesses.push(guess);

        match game.finish_schedule(&schedule) {
            Transition::Won { score, .. } => {
                return RoundResult {
                    target: target.clone(),
                    guesses,
                    won: true,
                    score,
                };
            }
            Transition::Lost { .. } => break,
            _ => {}
        }
    }

    RoundResult {
        target: target.clone(),
        guesses,
        won: false,
        score: 0,
    }
}

/// Simulate rounds for every target in `words` (or a limited subset)
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_simulation(words: &[Word], config: &SimulationConfig) -> SimulationStatistics {
    let mut targets: Vec<&Word> = words.iter().collect();
    if let Some(seed) = config.seed {
        targets.shuffle(&mut StdRng::seed_from_u64(seed));
    }
    targets.truncate(config.limit.unwrap_or(words.len()));

    println!("🎯 Simulating {} rounds...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let rounds: Vec<RoundResult> = targets
        .par_iter()
        .map(|target| {
            let result = play_round(target, words, config.first_word.as_ref());
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(rounds, start.elapsed())
}

/// Fold round results, in order, into session statistics
#[must_use]
pub fn summarize(rounds: Vec<RoundResult>, total_time: Duration) -> SimulationStatistics {
    let mut standing = Standing::new();
    for round in &rounds {
        if round.won {
            standing.record_win(round.score, round.guesses.len());
        } else {
            standing.record_loss();
        }
    }

    let won: Vec<&RoundResult> = rounds.iter().filter(|r| r.won).collect();
    let (average_score, average_guesses) = if won.is_empty() {
        (0.0, 0.0)
    } else {
        let n = won.len() as f64;
        (
            won.iter().map(|r| f64::from(r.score)).sum::<f64>() / n,
            won.iter().map(|r| r.guesses.len() as f64).sum::<f64>() / n,
        )
    };

    SimulationStatistics {
        rounds,
        standing,
        average_score,
        average_guesses,
        total_time,
    }
}
