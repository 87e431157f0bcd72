//! Offline word source over a fixed word list

use super::{Definition, SourceError, WordSource};
use crate::core::Word;
use crate::wordlists::{WORDS, loader};
use async_trait::async_trait;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Answers every lookup from an in-memory list
///
/// Definitions are never available offline.
#[derive(Debug, Clone)]
pub struct EmbeddedWordSource {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl EmbeddedWordSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let lookup = words.iter().cloned().collect();
        Self { words, lookup }
    }

    /// Source over the list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Source over a word list file, one word per line
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no playable words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let words = loader::load_from_file(path)?;
        if words.is_empty() {
            return Err(SourceError::Empty("word list file"));
        }
        Ok(Self::new(words))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Default for EmbeddedWordSource {
    fn default() -> Self {
        Self::embedded()
    }
}

#[async_trait]
impl WordSource for EmbeddedWordSource {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn candidate_pool(&self) -> Result<Vec<Word>, SourceError> {
        if self.words.is_empty() {
            return Err(SourceError::Empty("offline"));
        }
        Ok(self.words.clone())
    }

    async fn is_word_valid(&self, word: &Word) -> Result<bool, SourceError> {
        Ok(self.lookup.contains(word))
    }

    async fn definition(&self, word: &Word) -> Result<Definition, SourceError> {
        Err(SourceError::NotFound(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_list_answers_lookups() {
        let source = EmbeddedWordSource::embedded();
        assert_eq!(source.words().len(), WORDS.len());

        assert!(source.is_word_valid(&Word::new("crane").unwrap()).await.unwrap());
        assert!(!source.is_word_valid(&Word::new("xqzvw").unwrap()).await.unwrap());
        assert!(source.definition(&Word::new("crane").unwrap()).await.is_err());
        assert_eq!(source.candidate_pool().await.unwrap().len(), WORDS.len());
    }

    #[tokio::test]
    async fn empty_source_has_no_pool() {
        let source = EmbeddedWordSource::new(Vec::new());
        assert!(matches!(
            source.candidate_pool().await,
            Err(SourceError::Empty("offline"))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            EmbeddedWordSource::from_file("/definitely/not/here.txt"),
            Err(SourceError::Io(_))
        ));
    }
}
