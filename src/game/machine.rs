//! Round state machine
//!
//! `AwaitingInput → Validating → Revealing → (AwaitingInput | Won | Lost)`
//!
//! The machine never waits on anything itself. Dictionary checks are handed
//! out as [`ValidationTicket`]s and come back through
//! [`Game::complete_validation`]; reveal timing is handed out as a
//! [`RevealSchedule`] and comes back through [`Game::apply_scheduled`].
//! Both carry the round generation, so answers that arrive after a reset
//! are recognised and dropped.

use super::round::{Phase, Round, Row};
use super::schedule::{RevealSchedule, ScheduleId, ScheduledEvent};
use super::scoring::{self, RowCost, Standing};
use crate::core::{Evaluation, MAX_ROWS, Outcome, WORD_LENGTH, Word};
use std::fmt;
use tracing::{debug, info};

/// A keystroke, on-screen or physical
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Uppercase ASCII letter
    Letter(u8),
    Backspace,
    Enter,
}

impl Key {
    /// Map a typed character to a key; anything but a letter is ignored
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Parse a key label: `ENTER`, `BACKSPACE` or a single letter
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "ENTER" => Some(Self::Enter),
            "BACKSPACE" | "BACK" => Some(Self::Backspace),
            single => {
                let mut chars = single.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }
}

/// Short message shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    WordTooShort,
    NotInWordList,
    CannotValidate,
    NoSuggestions,
    LoadFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WordTooShort => "Word must be 5 letters",
            Self::NotInWordList => "Not in word list",
            Self::CannotValidate => "Could not check the word, try again",
            Self::NoSuggestions => "No new suggestions found",
            Self::LoadFailed => "Error loading word. Please try again.",
        })
    }
}

/// A pending dictionary check for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationTicket {
    pub generation: u64,
    pub row: usize,
    pub word: Word,
}

/// Answer to a dictionary check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    /// The lookup failed; nothing is known about the word
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key had no effect in the current phase
    Ignored,
    /// Current guess changed
    Edited,
    Rejected(Notice),
    /// Guess complete; the caller must run the dictionary check
    Validate(ValidationTicket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Ticket belongs to a superseded round or submission
    Stale,
    Rejected(Notice),
    Accepted {
        row: usize,
        evaluation: Evaluation,
        cost: RowCost,
        schedule: RevealSchedule,
    },
}

/// Effect of one scheduled event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Event belongs to a superseded round or schedule
    Stale,
    TileRevealed {
        row: usize,
        position: usize,
        outcome: Outcome,
    },
    /// Input moved to the given row
    Advanced { row: usize },
    Won {
        row: usize,
        score: u32,
        streak: u32,
        revealed: bool,
    },
    Lost { target: Word },
}

/// One player's game: the current round plus session standing
#[derive(Debug, Clone)]
pub struct Game {
    round: Round,
    standing: Standing,
    generation: u64,
    sequence: u32,
    active: Option<ScheduleId>,
    pending: Option<ValidationTicket>,
}

impl Game {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            round: Round::new(target),
            standing: Standing::new(),
            generation: 1,
            sequence: 0,
            active: None,
            pending: None,
        }
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn standing(&self) -> &Standing {
        &self.standing
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.round.phase
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.round.score.score()
    }

    /// Start a new round with a fresh target
    ///
    /// Total score carries over. The streak carries only out of a won round;
    /// abandoning a round in progress ends it.
    pub fn reset(&mut self, target: Word) {
        if self.round.phase != Phase::Won {
            self.standing.break_streak();
        }
        self.generation += 1;
        self.sequence = 0;
        self.active = None;
        self.pending = None;
        self.round = Round::new(target);
        info!(generation = self.generation, "new round");
    }

    /// Apply one keystroke
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.round.phase != Phase::AwaitingInput {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Letter(letter) => {
                if letter.is_ascii_uppercase() && self.round.current_guess.len() < WORD_LENGTH {
                    self.round.current_guess.push(char::from(letter));
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Backspace => {
                if self.round.current_guess.pop().is_none() {
                    return KeyOutcome::Ignored;
                }
                if self.round.current_guess.len() < WORD_LENGTH {
                    self.round.invalid_guess = false;
                }
                KeyOutcome::Edited
            }
            Key::Enter => self.submit(),
        }
    }

    /// Type a suggested word into the current row and submit it
    pub fn apply_suggestion(&mut self, word: &Word) -> KeyOutcome {
        if self.round.phase != Phase::AwaitingInput {
            return KeyOutcome::Ignored;
        }
        self.round.used_suggestions.push(word.clone());
        self.round.current_guess = word.text().to_string();
        self.round.invalid_guess = false;
        self.submit()
    }

    fn submit(&mut self) -> KeyOutcome {
        if self.round.current_guess.len() != WORD_LENGTH {
            return KeyOutcome::Rejected(Notice::WordTooShort);
        }
        let Ok(word) = Word::new(self.round.current_guess.as_str()) else {
            return KeyOutcome::Rejected(Notice::WordTooShort);
        };

        let ticket = ValidationTicket {
            generation: self.generation,
            row: self.round.current_row,
            word,
        };
        debug!(word = %ticket.word, row = ticket.row, "validating guess");
        self.round.phase = Phase::Validating;
        self.pending = Some(ticket.clone());
        KeyOutcome::Validate(ticket)
    }

    /// Feed back the answer to a dictionary check
    pub fn complete_validation(
        &mut self,
        ticket: &ValidationTicket,
        validity: Validity,
    ) -> SubmitOutcome {
        if self.round.phase != Phase::Validating || self.pending.as_ref() != Some(ticket) {
            debug!(word = %ticket.word, "discarding stale validation");
            return SubmitOutcome::Stale;
        }
        self.pending = None;

        match validity {
            Validity::Valid => self.accept(ticket.word.clone()),
            Validity::Invalid => {
                self.round.invalid_guess = true;
                self.round.phase = Phase::AwaitingInput;
                SubmitOutcome::Rejected(Notice::NotInWordList)
            }
            Validity::Unknown => {
                self.round.phase = Phase::AwaitingInput;
                SubmitOutcome::Rejected(Notice::CannotValidate)
            }
        }
    }

    fn accept(&mut self, guess: Word) -> SubmitOutcome {
        let row = self.round.current_row;
        let evaluation = Evaluation::calculate(&guess, &self.round.target);
        let cost = scoring::row_cost(
            &guess,
            &evaluation,
            &self.round.letter_states,
            &mut self.round.wrong_positions,
        );
        let score = self.round.score.apply(row, &cost);
        self.round.letter_states.absorb(&guess, &evaluation);
        info!(
            word = %guess,
            row,
            pattern = %evaluation.to_emoji(),
            cost = cost.total(),
            score,
            "guess accepted"
        );

        self.round.rows[row] = Row::submitted(guess, evaluation, cost);
        self.round.invalid_guess = false;
        self.round.phase = Phase::Revealing;

        let finishing = evaluation.is_perfect() || row == MAX_ROWS - 1;
        let schedule = self.issue_schedule(row, finishing);
        SubmitOutcome::Accepted {
            row,
            evaluation,
            cost,
            schedule,
        }
    }

    fn issue_schedule(&mut self, row: usize, finishing: bool) -> RevealSchedule {
        let id = ScheduleId {
            generation: self.generation,
            sequence: self.sequence,
        };
        self.sequence += 1;
        self.active = Some(id);
        RevealSchedule::for_row(id, row, finishing)
    }

    /// Apply one timed event from a [`RevealSchedule`]
    pub fn apply_scheduled(&mut self, id: ScheduleId, event: ScheduledEvent) -> Transition {
        if id.generation != self.generation {
            return Transition::Stale;
        }

        match event {
            ScheduledEvent::RevealTile { row, position } => {
                let Some(outcome) = self
                    .round
                    .rows
                    .get_mut(row)
                    .and_then(|r| r.reveal(position))
                else {
                    return Transition::Stale;
                };
                Transition::TileRevealed {
                    row,
                    position,
                    outcome,
                }
            }
            ScheduledEvent::Settle { row } => {
                if self.active != Some(id)
                    || self.round.phase != Phase::Revealing
                    || row != self.round.current_row
                {
                    return Transition::Stale;
                }
                self.active = None;
                self.settle(row)
            }
        }
    }

    /// Apply every step of a schedule at once, returning the final transition
    pub fn finish_schedule(&mut self, schedule: &RevealSchedule) -> Transition {
        schedule
            .steps()
            .iter()
            .map(|&(_, event)| self.apply_scheduled(schedule.id(), event))
            .last()
            .unwrap_or(Transition::Stale)
    }

    fn settle(&mut self, row: usize) -> Transition {
        self.round.rows[row].reveal_all();
        let perfect = self.round.rows[row]
            .evaluation()
            .is_some_and(Evaluation::is_perfect);
        let revealed = self.round.revealed_answer_row == Some(row);

        if perfect || revealed {
            let score = self.score();
            self.round.phase = Phase::Won;
            self.standing.record_win(score, row + 1);
            info!(
                target_word = %self.round.target,
                rows = row + 1,
                score,
                streak = self.standing.streak,
                revealed,
                "round won"
            );
            Transition::Won {
                row,
                score,
                streak: self.standing.streak,
                revealed,
            }
        } else if row == MAX_ROWS - 1 {
            self.round.phase = Phase::Lost;
            self.standing.record_loss();
            info!(target_word = %self.round.target, "round lost");
            Transition::Lost {
                target: self.round.target.clone(),
            }
        } else {
            self.round.current_row += 1;
            self.round.current_guess.clear();
            self.round.phase = Phase::AwaitingInput;
            Transition::Advanced {
                row: self.round.current_row,
            }
        }
    }

    /// Place the target in the next empty row and finish the round as won
    ///
    /// No points are deducted for the revealed row. Returns `None` once the
    /// round is over, or while the row being revealed already ends it.
    pub fn reveal_answer(&mut self) -> Option<RevealSchedule> {
        if self.round.phase.is_over() || self.settling_final_row() {
            return None;
        }

        let row = self
            .round
            .rows
            .iter()
            .position(|r| !r.is_submitted())
            .unwrap_or(MAX_ROWS - 1);
        let target = self.round.target.clone();

        self.pending = None;
        self.round
            .letter_states
            .absorb(&target, &Evaluation::PERFECT);
        self.round.rows[row] = Row::submitted(target, Evaluation::PERFECT, RowCost::ZERO);
        self.round.revealed_answer_row = Some(row);
        self.round.current_row = row;
        self.round.current_guess.clear();
        self.round.invalid_guess = false;
        self.round.phase = Phase::Revealing;
        info!(row, "answer revealed");

        Some(self.issue_schedule(row, true))
    }

    /// A row is on screen that will win or lose the round when it settles
    fn settling_final_row(&self) -> bool {
        if self.round.phase != Phase::Revealing {
            return false;
        }
        let row = self.round.current_row;
        row == MAX_ROWS - 1
            || self.round.rows[row]
                .evaluation()
                .is_some_and(Evaluation::is_perfect)
    }

    /// Store the clue for this round; later clues are ignored
    pub fn set_clue(&mut self, clue: impl Into<String>) -> &str {
        self.round.clue.get_or_insert_with(|| clue.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn type_word(game: &mut Game, text: &str) {
        for c in text.chars() {
            game.handle_key(Key::from_char(c).unwrap());
        }
    }

    fn submit(game: &mut Game, text: &str) -> SubmitOutcome {
        type_word(game, text);
        let KeyOutcome::Validate(ticket) = game.handle_key(Key::Enter) else {
            panic!("expected a validation ticket for {text}");
        };
        game.complete_validation(&ticket, Validity::Valid)
    }

    fn play(game: &mut Game, text: &str) -> Transition {
        match submit(game, text) {
            SubmitOutcome::Accepted { schedule, .. } => game.finish_schedule(&schedule),
            other => panic!("{text} was not accepted: {other:?}"),
        }
    }

    #[test]
    fn key_parsing() {
        assert_eq!(Key::from_char('a'), Some(Key::Letter(b'A')));
        assert_eq!(Key::from_char('1'), None);
        assert_eq!(Key::parse("enter"), Some(Key::Enter));
        assert_eq!(Key::parse("BACKSPACE"), Some(Key::Backspace));
        assert_eq!(Key::parse("q"), Some(Key::Letter(b'Q')));
        assert_eq!(Key::parse("qq"), None);
    }

    #[test]
    fn typing_stops_at_five_letters() {
        let mut game = Game::new(word("crane"));
        type_word(&mut game, "slates");
        assert_eq!(game.round().current_guess(), "SLATE");
        assert_eq!(game.handle_key(Key::Letter(b'X')), KeyOutcome::Ignored);
    }

    #[test]
    fn backspace_on_empty_is_ignored() {
        let mut game = Game::new(word("crane"));
        assert_eq!(game.handle_key(Key::Backspace), KeyOutcome::Ignored);
        type_word(&mut game, "ab");
        assert_eq!(game.handle_key(Key::Backspace), KeyOutcome::Edited);
        assert_eq!(game.round().current_guess(), "A");
    }

    #[test]
    fn enter_with_short_guess_is_rejected() {
        let mut game = Game::new(word("crane"));
        type_word(&mut game, "cra");
        assert_eq!(
            game.handle_key(Key::Enter),
            KeyOutcome::Rejected(Notice::WordTooShort)
        );
        assert_eq!(game.phase(), Phase::AwaitingInput);
        assert_eq!(Notice::WordTooShort.to_string(), "Word must be 5 letters");
    }

    #[test]
    fn accepted_row_advances_after_settle() {
        let mut game = Game::new(word("crane"));
        let SubmitOutcome::Accepted {
            row,
            evaluation,
            cost,
            schedule,
        } = submit(&mut game, "trace")
        else {
            panic!("trace should be accepted");
        };

        assert_eq!(row, 0);
        assert_eq!(evaluation.to_emoji(), "⬜🟩🟩🟨🟩");
        assert_eq!(cost.total(), 19);
        assert_eq!(game.score(), 31);
        assert_eq!(game.phase(), Phase::Revealing);

        // Typing during the reveal does nothing
        assert_eq!(game.handle_key(Key::Letter(b'A')), KeyOutcome::Ignored);

        // Tiles flip one at a time
        let (_, first) = schedule.steps()[0];
        assert_eq!(
            game.apply_scheduled(schedule.id(), first),
            Transition::TileRevealed {
                row: 0,
                position: 0,
                outcome: Outcome::Incorrect
            }
        );
        assert_eq!(
            game.round().rows()[0].visible_outcome(0),
            Some(Outcome::Incorrect)
        );
        assert_eq!(game.round().rows()[0].visible_outcome(1), None);

        assert_eq!(
            game.finish_schedule(&schedule),
            Transition::Advanced { row: 1 }
        );
        assert_eq!(game.round().current_row(), 1);
        assert_eq!(game.round().current_guess(), "");
        assert!(game.round().rows()[0].is_fully_revealed());
        assert_eq!(game.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn invalid_word_keeps_guess_and_row() {
        let mut game = Game::new(word("crane"));
        type_word(&mut game, "xxxxx");
        let KeyOutcome::Validate(ticket) = game.handle_key(Key::Enter) else {
            panic!("expected validation");
        };

        assert_eq!(
            game.complete_validation(&ticket, Validity::Invalid),
            SubmitOutcome::Rejected(Notice::NotInWordList)
        );
        assert!(game.round().is_invalid_guess());
        assert_eq!(game.round().current_row(), 0);
        assert_eq!(game.round().current_guess(), "XXXXX");
        assert_eq!(game.score(), 50);

        // Deleting a letter clears the flag
        game.handle_key(Key::Backspace);
        assert!(!game.round().is_invalid_guess());
    }

    #[test]
    fn failed_lookup_leaves_guess_editable() {
        let mut game = Game::new(word("crane"));
        type_word(&mut game, "slate");
        let KeyOutcome::Validate(ticket) = game.handle_key(Key::Enter) else {
            panic!("expected validation");
        };

        assert_eq!(
            game.complete_validation(&ticket, Validity::Unknown),
            SubmitOutcome::Rejected(Notice::CannotValidate)
        );
        assert!(!game.round().is_invalid_guess());
        assert_eq!(game.phase(), Phase::AwaitingInput);
        assert_eq!(game.round().current_guess(), "SLATE");
    }

    #[test]
    fn second_enter_during_validation_is_ignored() {
        let mut game = Game::new(word("crane"));
        type_word(&mut game, "slate");
        let KeyOutcome::Validate(ticket) = game.handle_key(Key::Enter) else {
            panic!("expected validation");
        };
        assert_eq!(game.handle_key(Key::Enter), KeyOutcome::Ignored);
        assert_eq!(game.phase(), Phase::Validating);

        assert!(matches!(
            game.complete_validation(&ticket, Validity::Valid),
            SubmitOutcome::Accepted { row: 0, .. }
        ));
        // Exactly one row consumed and one deduction made
        assert_eq!(game.round().submitted().count(), 1);
        assert_eq!(
            game.complete_validation(&ticket, Validity::Valid),
            SubmitOutcome::Stale
        );
    }

    #[test]
    fn first_row_win() {
        let mut game = Game::new(word("crane"));
        let transition = play(&mut game, "crane");

        assert_eq!(
            transition,
            Transition::Won {
                row: 0,
                score: 25,
                streak: 1,
                revealed: false
            }
        );
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.standing().total_score, 25);
        assert_eq!(game.standing().streak, 1);
        assert_eq!(game.handle_key(Key::Letter(b'A')), KeyOutcome::Ignored);
        assert_eq!(game.reveal_answer(), None);
    }

    #[test]
    fn six_misses_lose_and_break_streak() {
        let mut game = Game::new(word("crane"));
        play(&mut game, "crane");
        assert_eq!(game.standing().streak, 1);

        game.reset(word("pilot"));
        let guesses = ["slate", "crane", "music", "dream", "fable", "tiger"];
        let mut last = Transition::Stale;
        for guess in guesses {
            last = play(&mut game, guess);
        }

        assert_eq!(
            last,
            Transition::Lost {
                target: word("pilot")
            }
        );
        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.standing().streak, 0);
        assert_eq!(game.standing().total_score, 25);
        assert_eq!(game.round().submitted().count(), MAX_ROWS);
    }

    #[test]
    fn streak_survives_reset_only_after_win() {
        let mut game = Game::new(word("crane"));
        play(&mut game, "crane");
        game.reset(word("slate"));
        assert_eq!(game.standing().streak, 1);

        // Abandon a round in progress
        play(&mut game, "crane");
        game.reset(word("pilot"));
        assert_eq!(game.standing().streak, 0);
        assert_eq!(game.standing().total_score, 25);
    }

    #[test]
    fn events_from_previous_round_are_dropped() {
        let mut game = Game::new(word("crane"));
        let SubmitOutcome::Accepted { schedule, .. } = submit(&mut game, "slate") else {
            panic!("slate should be accepted");
        };

        game.reset(word("pilot"));
        assert_eq!(game.finish_schedule(&schedule), Transition::Stale);
        assert_eq!(game.round().current_row(), 0);
        assert_eq!(game.phase(), Phase::AwaitingInput);
        assert!(!game.round().rows()[0].is_submitted());
    }

    #[test]
    fn validation_from_previous_round_is_dropped() {
        let mut game = Game::new(word("crane"));
        type_word(&mut game, "slate");
        let KeyOutcome::Validate(ticket) = game.handle_key(Key::Enter) else {
            panic!("expected validation");
        };

        game.reset(word("pilot"));
        assert_eq!(
            game.complete_validation(&ticket, Validity::Valid),
            SubmitOutcome::Stale
        );
        assert_eq!(game.round().submitted().count(), 0);
    }

    #[test]
    fn reveal_answer_wins_without_deduction() {
        let mut game = Game::new(word("crane"));
        play(&mut game, "slate");
        let score = game.score();

        let schedule = game.reveal_answer().unwrap();
        assert_eq!(schedule.row(), 1);
        assert_eq!(
            game.finish_schedule(&schedule),
            Transition::Won {
                row: 1,
                score,
                streak: 1,
                revealed: true
            }
        );
        assert_eq!(game.round().rows()[1].guess(), Some(&word("crane")));
        assert_eq!(game.round().revealed_answer_row(), Some(1));
        assert_eq!(game.standing().total_score, score);
    }

    #[test]
    fn reveal_during_reveal_supersedes_pending_settle() {
        let mut game = Game::new(word("crane"));
        let SubmitOutcome::Accepted { schedule, .. } = submit(&mut game, "slate") else {
            panic!("slate should be accepted");
        };

        let answer = game.reveal_answer().unwrap();
        assert_eq!(answer.row(), 1);
        // Settle of the older schedule no longer applies
        assert_eq!(game.finish_schedule(&schedule), Transition::Stale);
        assert!(matches!(
            game.finish_schedule(&answer),
            Transition::Won { revealed: true, .. }
        ));
    }

    #[test]
    fn reveal_is_refused_while_a_winning_row_settles() {
        let mut game = Game::new(word("crane"));
        let SubmitOutcome::Accepted { schedule, .. } = submit(&mut game, "crane") else {
            panic!("crane should be accepted");
        };

        assert_eq!(game.reveal_answer(), None);
        assert_eq!(
            game.finish_schedule(&schedule),
            Transition::Won {
                row: 0,
                score: 25,
                streak: 1,
                revealed: false
            }
        );
        assert_eq!(game.standing().win_distribution[1], 1);
        assert_eq!(game.standing().win_distribution[2], 0);
    }

    #[test]
    fn reveal_is_refused_while_the_last_row_settles() {
        let mut game = Game::new(word("pilot"));
        for guess in ["slate", "crane", "music", "dream", "fable"] {
            play(&mut game, guess);
        }
        let SubmitOutcome::Accepted { schedule, .. } = submit(&mut game, "tiger") else {
            panic!("tiger should be accepted");
        };

        assert_eq!(game.reveal_answer(), None);
        assert_eq!(
            game.finish_schedule(&schedule),
            Transition::Lost {
                target: word("pilot")
            }
        );
        assert_eq!(game.standing().streak, 0);
        assert_eq!(game.standing().total_score, 0);
    }

    #[test]
    fn suggestion_fills_and_submits() {
        let mut game = Game::new(word("crane"));
        let outcome = game.apply_suggestion(&word("trace"));
        assert!(matches!(outcome, KeyOutcome::Validate(ref t) if t.word == word("trace")));
        assert_eq!(game.round().used_suggestions(), &[word("trace")]);
        assert_eq!(game.phase(), Phase::Validating);
    }

    #[test]
    fn clue_is_kept_once_set() {
        let mut game = Game::new(word("crane"));
        assert_eq!(game.set_clue("A bird"), "A bird");
        assert_eq!(game.set_clue("A machine"), "A bird");
        assert_eq!(game.round().clue(), Some("A bird"));
        game.reset(word("slate"));
        assert_eq!(game.round().clue(), None);
    }
}
