//! Session-scoped caches: fetched definitions and the target pool

use super::Definition;
use crate::core::Word;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};

/// Refill the pool when it holds fewer words than this
pub const REFILL_THRESHOLD: usize = 10;
/// Refill again when fewer unplayed words than this remain
pub const MIN_AVAILABLE: usize = 5;
/// Upper bound on pool fetches for a single draw
pub const MAX_POOL_FETCHES: usize = 3;

/// Definitions already fetched, placeholders included
#[derive(Debug, Default)]
pub struct DefinitionCache {
    entries: FxHashMap<Word, Definition>,
}

impl DefinitionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&Definition> {
        self.entries.get(word)
    }

    /// Cached definition, only if it is a real one
    #[must_use]
    pub fn available(&self, word: &Word) -> Option<&Definition> {
        self.get(word).filter(|d| d.is_available())
    }

    pub fn insert(&mut self, word: Word, definition: Definition) {
        self.entries.insert(word, definition);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cached candidate targets plus the words already played
#[derive(Debug, Default)]
pub struct WordPool {
    words: Vec<Word>,
    played: FxHashSet<Word>,
    last: Option<Word>,
}

impl WordPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool is too small to draw from without refilling
    #[must_use]
    pub fn needs_refill(&self) -> bool {
        self.words.len() < REFILL_THRESHOLD
    }

    /// Unplayed words left in the pool
    #[must_use]
    pub fn available(&self) -> usize {
        self.words.iter().filter(|w| !self.played.contains(*w)).count()
    }

    /// Replace the pool contents
    pub fn replace(&mut self, words: Vec<Word>) {
        self.words = words;
    }

    /// Draw a random unplayed word and remove it from the pool
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Word> {
        let candidates: Vec<usize> = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| !self.played.contains(*w))
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let index = candidates[rng.random_range(0..candidates.len())];
        let word = self.words.remove(index);
        self.played.insert(word.clone());
        self.last = Some(word.clone());
        Some(word)
    }

    /// Make played words drawable again, except the most recent one
    ///
    /// The most recent word is released too when nothing else is left.
    pub fn recycle(&mut self) {
        self.played.clear();
        if let Some(last) = &self.last
            && self.words.iter().any(|w| w != last)
        {
            self.played.insert(last.clone());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn played(&self) -> usize {
        self.played.len()
    }
}
