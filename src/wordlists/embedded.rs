//! Embedded word list
//!
//! Generated at build time from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Targets used when no word source can supply a pool
pub const FALLBACK: &[&str] = &[
    "HAPPY", "BRAIN", "CLOUD", "DREAM", "EAGLE", "FLAME", "GHOST", "HEART", "IVORY", "JOKER",
    "LIGHT", "MUSIC", "NIGHT", "OCEAN", "PEARL", "QUICK", "RIVER", "STORM", "TIGER", "VOICE",
];
