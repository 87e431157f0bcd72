//! Word suggestions
//!
//! Builds constraints from the evaluated rows of a round and filters
//! candidate words against them.

mod constraints;
mod filter;

pub use constraints::Constraints;
pub use filter::{count_matching, suggest};
