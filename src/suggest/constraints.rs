//! Constraints derived from evaluated guesses

use crate::core::{Evaluation, Outcome, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Everything the submitted rows say about the target
///
/// A letter seen as `correct` or `wrong-position` anywhere is never treated
/// as absent, even if another occurrence of it evaluated `incorrect`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    correct: [Option<u8>; WORD_LENGTH],
    present: FxHashSet<u8>,
    absent: FxHashSet<u8>,
    excluded: FxHashSet<(u8, usize)>,
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every evaluated row into one set of constraints
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, Word};
    /// use wordle_game::suggest::Constraints;
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &Word::new("crane").unwrap());
    /// let constraints = Constraints::from_rows([(&guess, &evaluation)]);
    ///
    /// assert!(constraints.matches(&Word::new("crane").unwrap()));
    /// assert!(!constraints.matches(&Word::new("trace").unwrap()));
    /// ```
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = (&'a Word, &'a Evaluation)>) -> Self {
        let mut constraints = Self::new();
        let mut ruled_out: Vec<(u8, usize)> = Vec::new();

        for (guess, evaluation) in rows {
            for (position, (&letter, outcome)) in
                guess.chars().iter().zip(evaluation.iter()).enumerate()
            {
                match outcome {
                    Outcome::Correct => {
                        constraints.correct[position] = Some(letter);
                    }
                    Outcome::WrongPosition => {
                        constraints.present.insert(letter);
                        constraints.excluded.insert((letter, position));
                    }
                    Outcome::Incorrect => ruled_out.push((letter, position)),
                }
            }
        }

        for (letter, position) in ruled_out {
            if constraints.is_known_present(letter) {
                // Extra copy of a letter the target does have
                constraints.excluded.insert((letter, position));
            } else {
                constraints.absent.insert(letter);
            }
        }
        constraints
    }

    /// Require a letter at a position
    #[must_use]
    pub fn with_correct(mut self, position: usize, letter: u8) -> Self {
        if let Some(slot) = self.correct.get_mut(position) {
            *slot = Some(letter);
        }
        self.absent.remove(&letter);
        self
    }

    /// Require a letter somewhere, but not at `position`
    #[must_use]
    pub fn with_wrong_position(mut self, letter: u8, position: usize) -> Self {
        self.present.insert(letter);
        self.excluded.insert((letter, position));
        self.absent.remove(&letter);
        self
    }

    /// Forbid a letter unless it is already known to be present
    #[must_use]
    pub fn with_absent(mut self, letter: u8) -> Self {
        if !self.is_known_present(letter) {
            self.absent.insert(letter);
        }
        self
    }

    fn is_known_present(&self, letter: u8) -> bool {
        self.present.contains(&letter) || self.correct.contains(&Some(letter))
    }

    #[must_use]
    pub const fn correct(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.correct
    }

    /// Letters seen in the wrong position, sorted
    #[must_use]
    pub fn present(&self) -> Vec<u8> {
        sorted(&self.present)
    }

    /// Letters ruled out entirely, sorted
    #[must_use]
    pub fn absent(&self) -> Vec<u8> {
        sorted(&self.absent)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct.iter().all(Option::is_none)
            && self.present.is_empty()
            && self.absent.is_empty()
            && self.excluded.is_empty()
    }

    /// Check a candidate against every constraint
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let chars = word.chars();

        let fixed_ok = self
            .correct
            .iter()
            .zip(chars)
            .all(|(fixed, &letter)| fixed.is_none_or(|f| f == letter));

        fixed_ok
            && self.present.iter().all(|&letter| word.has_letter(letter))
            && !chars.iter().any(|letter| self.absent.contains(letter))
            && !chars
                .iter()
                .enumerate()
                .any(|(position, &letter)| self.excluded.contains(&(letter, position)))
    }

    /// Positional pattern such as `c__n_`, lowercase with `_` for unknowns
    #[must_use]
    pub fn pattern(&self) -> String {
        self.correct
            .iter()
            .map(|slot| slot.map_or('_', |l| char::from(l.to_ascii_lowercase())))
            .collect()
    }

    /// Letters that must appear: present plus fixed, lowercase and sorted
    #[must_use]
    pub fn required_letters(&self) -> String {
        let mut letters: Vec<u8> = self
            .present
            .iter()
            .copied()
            .chain(self.correct.iter().flatten().copied())
            .collect();
        letters.sort_unstable();
        letters.dedup();
        lowercase(&letters)
    }

    /// Absent letters, lowercase and sorted
    #[must_use]
    pub fn excluded_letters(&self) -> String {
        lowercase(&self.absent())
    }
}

fn sorted(set: &FxHashSet<u8>) -> Vec<u8> {
    let mut letters: Vec<u8> = set.iter().copied().collect();
    letters.sort_unstable();
    letters
}

fn lowercase(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|l| char::from(l.to_ascii_lowercase()))
        .collect()
}
