//! Reveal timing
//!
//! Accepting a row does not flip its tiles immediately. The state machine
//! hands back a [`RevealSchedule`]: five tile events spaced
//! [`REVEAL_INTERVAL`] apart followed by a settle event, all tagged with a
//! [`ScheduleId`]. Whoever owns the clock (TUI loop, CLI, tests) feeds the
//! events back in order; events from a superseded round are dropped by the
//! machine.

use crate::core::WORD_LENGTH;
use std::time::{Duration, Instant};

/// Delay between two consecutive tile reveals
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(200);
/// Extra wait after the last tile before moving to the next row
pub const SETTLE_BUFFER_ADVANCE: Duration = Duration::from_millis(100);
/// Extra wait after the last tile before ending the round
pub const SETTLE_BUFFER_FINISH: Duration = Duration::from_millis(200);
/// How long a transient notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Identifies one batch of scheduled events
///
/// `generation` changes on every reset; `sequence` changes on every
/// schedule issued within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId {
    pub generation: u64,
    pub sequence: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEvent {
    /// Flip one tile of a row
    RevealTile { row: usize, position: usize },
    /// All tiles shown: decide win, loss or next row
    Settle { row: usize },
}

/// Timed events that disclose one submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSchedule {
    id: ScheduleId,
    row: usize,
    steps: Vec<(Duration, ScheduledEvent)>,
}

impl RevealSchedule {
    /// Build the schedule for a row
    ///
    /// `finishing` selects the longer settle buffer used when the row ends
    /// the round.
    #[must_use]
    pub fn for_row(id: ScheduleId, row: usize, finishing: bool) -> Self {
        let mut steps: Vec<(Duration, ScheduledEvent)> = (0..WORD_LENGTH)
            .map(|position| {
                (
                    REVEAL_INTERVAL * position as u32,
                    ScheduledEvent::RevealTile { row, position },
                )
            })
            .collect();

        let buffer = if finishing {
            SETTLE_BUFFER_FINISH
        } else {
            SETTLE_BUFFER_ADVANCE
        };
        steps.push((
            REVEAL_INTERVAL * WORD_LENGTH as u32 + buffer,
            ScheduledEvent::Settle { row },
        ));

        Self { id, row, steps }
    }

    #[must_use]
    pub const fn id(&self) -> ScheduleId {
        self.id
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// (delay from submission, event) pairs in firing order
    #[must_use]
    pub fn steps(&self) -> &[(Duration, ScheduledEvent)] {
        &self.steps
    }

    /// Delay until the settle event
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.steps.last().map_or(Duration::ZERO, |(delay, _)| *delay)
    }
}

/// Pending scheduled events ordered by deadline
///
/// Front-ends that poll (rather than sleep) keep one of these and drain
/// the due events on every tick.
#[derive(Debug, Default)]
pub struct Timeline {
    pending: Vec<(Instant, ScheduleId, ScheduledEvent)>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue every step of a schedule relative to `start`
    pub fn push(&mut self, schedule: &RevealSchedule, start: Instant) {
        for &(delay, event) in schedule.steps() {
            self.pending.push((start + delay, schedule.id(), event));
        }
        self.pending.sort_by_key(|&(deadline, _, _)| deadline);
    }

    /// Remove and return every event whose deadline has passed
    pub fn due(&mut self, now: Instant) -> Vec<(ScheduleId, ScheduledEvent)> {
        let split = self.pending.partition_point(|&(deadline, _, _)| deadline <= now);
        self.pending
            .drain(..split)
            .map(|(_, id, event)| (id, event))
            .collect()
    }

    /// Time until the next deadline, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|&(deadline, _, _)| deadline)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
