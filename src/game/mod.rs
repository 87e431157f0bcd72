//! Round engine
//!
//! Scoring, reveal timing and the state machine that ties a round together.
//! Nothing in here performs I/O; lookups and clocks are driven from outside.

mod machine;
mod round;
pub mod schedule;
pub mod scoring;

pub use machine::{
    Game, Key, KeyOutcome, Notice, SubmitOutcome, Transition, ValidationTicket, Validity,
};
pub use round::{Phase, Round, Row};
pub use schedule::{RevealSchedule, ScheduleId, ScheduledEvent, Timeline};
pub use scoring::{RowCost, ScoreBoard, Standing, WrongPositionHistory};
