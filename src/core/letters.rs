//! Cumulative per-letter state for keyboard hints
//!
//! Each letter holds the strongest outcome ever observed for it in the
//! round. States only move upward: unset → incorrect → wrong-position → correct.

use super::{Evaluation, Outcome, Word};
use rustc_hash::FxHashMap;

/// Best-known outcome per letter across all submitted guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: FxHashMap<u8, Outcome>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a letter, `None` if never guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Outcome> {
        self.states.get(&letter).copied()
    }

    /// Record one observation for a letter
    ///
    /// - `Correct` always wins
    /// - `WrongPosition` replaces only unset or `Incorrect`
    /// - `Incorrect` applies only to an unset letter
    ///
    /// Returns `true` if the stored state changed.
    pub fn record(&mut self, letter: u8, outcome: Outcome) -> bool {
        let current = self.get(letter);
        let upgrade = match outcome {
            Outcome::Correct => current != Some(Outcome::Correct),
            Outcome::WrongPosition => {
                !matches!(current, Some(Outcome::Correct | Outcome::WrongPosition))
            }
            Outcome::Incorrect => current.is_none(),
        };

        if upgrade {
            self.states.insert(letter, outcome);
        }
        upgrade
    }

    /// Fold one evaluated guess into the map
    ///
    /// Order within the row does not matter: a letter that is correct in one
    /// position and incorrect in another ends up `Correct`.
    pub fn absorb(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, outcome) in guess.chars().iter().zip(evaluation.iter()) {
            self.record(letter, outcome);
        }
    }

    /// Copy of the map with one more evaluated guess folded in
    #[must_use]
    pub fn with_guess(&self, guess: &Word, evaluation: &Evaluation) -> Self {
        let mut next = self.clone();
        next.absorb(guess, evaluation);
        next
    }

    /// Letters with a known state, sorted alphabetically
    #[must_use]
    pub fn sorted(&self) -> Vec<(u8, Outcome)> {
        let mut entries: Vec<(u8, Outcome)> =
            self.states.iter().map(|(&l, &o)| (l, o)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absorb(states: &mut LetterStates, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        states.absorb(&guess, &Evaluation::calculate(&guess, &target));
    }

    #[test]
    fn empty_by_default() {
        let states = LetterStates::new();
        assert!(states.is_empty());
        assert_eq!(states.get(b'A'), None);
    }

    #[test]
    fn record_upgrade_rules() {
        let mut states = LetterStates::new();

        assert!(states.record(b'A', Outcome::Incorrect));
        assert!(!states.record(b'A', Outcome::Incorrect));
        assert!(states.record(b'A', Outcome::WrongPosition));
        assert!(!states.record(b'A', Outcome::Incorrect));
        assert!(!states.record(b'A', Outcome::WrongPosition));
        assert!(states.record(b'A', Outcome::Correct));
        assert!(!states.record(b'A', Outcome::WrongPosition));
        assert!(!states.record(b'A', Outcome::Incorrect));

        assert_eq!(states.get(b'A'), Some(Outcome::Correct));
    }

    #[test]
    fn correct_never_downgrades_across_guesses() {
        let mut states = LetterStates::new();
        absorb(&mut states, "crane", "cloud");
        assert_eq!(states.get(b'C'), Some(Outcome::Correct));

        // C is nowhere near position 0 now, and other letters are absent
        absorb(&mut states, "ethic", "cloud");
        assert_eq!(states.get(b'C'), Some(Outcome::Correct));
        assert_eq!(states.get(b'E'), Some(Outcome::Incorrect));
    }

    #[test]
    fn duplicate_letter_in_one_row_keeps_strongest() {
        // Guess SPEED vs target ABIDE: first E wrong-position, second E incorrect
        let mut states = LetterStates::new();
        absorb(&mut states, "speed", "abide");
        assert_eq!(states.get(b'E'), Some(Outcome::WrongPosition));

        // Guess EERIE vs THEME: E wrong-position, incorrect, then correct at the end
        let mut states = LetterStates::new();
        absorb(&mut states, "eerie", "theme");
        assert_eq!(states.get(b'E'), Some(Outcome::Correct));
    }

    #[test]
    fn with_guess_leaves_original_untouched() {
        let states = LetterStates::new();
        let guess = Word::new("trace").unwrap();
        let target = Word::new("crane").unwrap();
        let next = states.with_guess(&guess, &Evaluation::calculate(&guess, &target));

        assert!(states.is_empty());
        assert_eq!(next.len(), 5);
        assert_eq!(next.get(b'T'), Some(Outcome::Incorrect));
        assert_eq!(next.get(b'C'), Some(Outcome::WrongPosition));
    }

    #[test]
    fn sorted_is_alphabetical() {
        let mut states = LetterStates::new();
        absorb(&mut states, "trace", "crane");
        let letters: Vec<u8> = states.sorted().into_iter().map(|(l, _)| l).collect();
        assert_eq!(letters, b"ACERT".to_vec());
    }
}
