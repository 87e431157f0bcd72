//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod simulate;

pub use evaluate::{EvaluationReport, evaluate_guess};
pub use simple::run_simple;
pub use simulate::{RoundResult, SimulationConfig, SimulationStatistics, run_simulation};
