//! Wordle Game
//!
//! A single-player Wordle round engine: two-pass guess evaluation, keyboard
//! hints, per-row scoring with streaks, timed tile reveals, clues and
//! constraint-based suggestions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Evaluation, Outcome, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("abide").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &target);
//! assert_eq!(evaluation.outcome(2), Outcome::WrongPosition);
//! assert_eq!(evaluation.outcome(3), Outcome::Incorrect);
//! ```

// Core domain types
pub mod core;

// Round engine: state machine, scoring, reveal schedule
pub mod game;

// Constraint-based suggestions
pub mod suggest;

// Word, definition and validation sources
pub mod services;

// Session state spanning rounds
pub mod session;

// Runtime configuration and logging
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
