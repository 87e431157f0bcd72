//! Terminal output formatting
//!
//! Coloured tiles, boards and result summaries for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_definition, print_evaluation_report, print_keyboard, print_score_line,
    print_simulation_result, print_standing,
};
