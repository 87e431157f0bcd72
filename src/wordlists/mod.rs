//! Built-in word lists
//!
//! The embedded list backs the offline word source and simulations; the
//! fallback list is the last resort for target selection.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK, WORDS, WORDS_COUNT};
