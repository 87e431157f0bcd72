//! Guess evaluation against a target word
//!
//! An evaluation is the ordered sequence of five per-letter outcomes:
//! - `Correct`: letter in the right position
//! - `WrongPosition`: letter in the target, elsewhere
//! - `Incorrect`: no unmatched occurrence left in the target

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Outcome for a single letter of a guess
///
/// Variants are ordered by strength so that `Correct > WrongPosition > Incorrect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Incorrect,
    WrongPosition,
    Correct,
}

impl Outcome {
    /// Stable kebab-case name, as used for tile and key styling
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::WrongPosition => "wrong-position",
            Self::Incorrect => "incorrect",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluation of one guess: exactly one outcome per position
///
/// Created once per submission and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Outcome; WORD_LENGTH]);

impl Evaluation {
    /// All letters correct
    pub const PERFECT: Self = Self([Outcome::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(outcomes: [Outcome; WORD_LENGTH]) -> Self {
        Self(outcomes)
    }

    /// Score `guess` against `target`
    ///
    /// Duplicate-letter safe: each target letter can satisfy at most one
    /// guess letter.
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches become `Correct` and both
    ///    letters are removed from further matching
    /// 2. Second pass: each remaining guess letter takes the leftmost
    ///    unmatched occurrence in the target, becoming `WrongPosition`
    /// 3. Everything else stays `Incorrect`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, Outcome, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let target = Word::new("floor").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     evaluation.outcomes(),
    ///     &[
    ///         Outcome::WrongPosition,
    ///         Outcome::WrongPosition,
    ///         Outcome::Incorrect,
    ///         Outcome::Correct,
    ///         Outcome::Incorrect,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Outcome::Incorrect; WORD_LENGTH];
        let mut remaining_guess: [Option<u8>; WORD_LENGTH] = (*guess.chars()).map(Some);
        let mut remaining_target: [Option<u8>; WORD_LENGTH] = (*target.chars()).map(Some);

        // First pass: exact matches
        for i in 0..WORD_LENGTH {
            if remaining_guess[i] == remaining_target[i] {
                result[i] = Outcome::Correct;
                remaining_guess[i] = None;
                remaining_target[i] = None;
            }
        }

        // Second pass: consume one unmatched target occurrence per letter
        for i in 0..WORD_LENGTH {
            let Some(letter) = remaining_guess[i] else {
                continue;
            };
            if let Some(slot) = remaining_target.iter_mut().find(|t| **t == Some(letter)) {
                result[i] = Outcome::WrongPosition;
                *slot = None;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; WORD_LENGTH] {
        &self.0
    }

    /// Outcome at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn outcome(&self, position: usize) -> Outcome {
        self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.0.iter().copied()
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter().filter(|&o| o == Outcome::Correct).count()
    }

    #[must_use]
    pub fn count_wrong_position(&self) -> usize {
        self.iter().filter(|&o| o == Outcome::WrongPosition).count()
    }

    /// Parse an evaluation from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for wrong position
    /// - '-'/'_'/⬜ for incorrect
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Evaluation;
    ///
    /// let e1 = Evaluation::parse("GY-GY").unwrap();
    /// let e2 = Evaluation::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(e1, e2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Outcome::Incorrect; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Outcome::Correct,
                'Y' | 'y' | '🟨' => Outcome::WrongPosition,
                '-' | '_' | '⬜' => Outcome::Incorrect,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(Outcome::emoji).collect()
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid evaluation string: {s}"))
    }
}
