//! Word sources
//!
//! Everything the game needs from the outside world goes through the
//! [`WordSource`] trait: a pool of candidate targets, dictionary checks,
//! definitions and constraint-matching suggestions. [`HttpWordSource`] talks
//! to public word APIs; [`EmbeddedWordSource`] answers from the built-in list.

mod cache;
mod definition;
mod http;
mod offline;

pub use cache::{DefinitionCache, MAX_POOL_FETCHES, MIN_AVAILABLE, REFILL_THRESHOLD, WordPool};
pub use definition::{DEFINITION_UNAVAILABLE, Definition, NO_CLUE, Sense};
pub use http::{HttpWordSource, STOPLIST};
pub use offline::EmbeddedWordSource;

use crate::core::Word;
use crate::game::Validity;
use crate::suggest::{Constraints, suggest};
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

/// Most suggestions requested from a source in one call
pub const SUGGESTION_LIMIT: usize = 10;

/// Failure of a word source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("{0} returned no usable words")]
    Empty(&'static str),

    #[error("no definition found for {0}")]
    NotFound(String),

    #[error("could not read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Provider of words, dictionary checks and definitions
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// A batch of candidate target words
    async fn candidate_pool(&self) -> Result<Vec<Word>, SourceError>;

    /// Whether the dictionary knows the word
    async fn is_word_valid(&self, word: &Word) -> Result<bool, SourceError>;

    async fn definition(&self, word: &Word) -> Result<Definition, SourceError>;

    /// Words matching the constraints, at most [`SUGGESTION_LIMIT`]
    ///
    /// The default filters [`WordSource::candidate_pool`] locally.
    async fn suggestions(&self, constraints: &Constraints) -> Result<Vec<Word>, SourceError> {
        let pool = self.candidate_pool().await?;
        Ok(suggest(constraints, &[], &pool)
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .cloned()
            .collect())
    }
}

/// Run the dictionary check for a submitted guess
///
/// Lookup failures become [`Validity::Unknown`] so the round can carry on.
pub async fn check_word(source: &dyn WordSource, word: &Word) -> Validity {
    match source.is_word_valid(word).await {
        Ok(true) => Validity::Valid,
        Ok(false) => Validity::Invalid,
        Err(e) => {
            warn!(source = source.name(), %word, error = %e, "dictionary check failed");
            Validity::Unknown
        }
    }
}

/// Fetch a definition, substituting the placeholder on any failure
pub async fn fetch_definition(source: &dyn WordSource, word: &Word) -> Definition {
    match source.definition(word).await {
        Ok(definition) => definition,
        Err(e) => {
            warn!(source = source.name(), %word, error = %e, "definition lookup failed");
            Definition::unavailable(word)
        }
    }
}

/// Collect suggestion candidates, falling back to the general pool
///
/// Source errors are logged and treated as "no words".
pub async fn suggestion_candidates(
    source: &dyn WordSource,
    constraints: &Constraints,
    exclude: &[Word],
) -> Vec<Word> {
    let primary = source.suggestions(constraints).await.unwrap_or_else(|e| {
        warn!(source = source.name(), error = %e, "suggestion lookup failed");
        Vec::new()
    });
    let matching: Vec<Word> = suggest(constraints, exclude, &primary)
        .into_iter()
        .cloned()
        .collect();
    if !matching.is_empty() {
        return matching;
    }

    let pool = source.candidate_pool().await.unwrap_or_else(|e| {
        warn!(source = source.name(), error = %e, "fallback pool fetch failed");
        Vec::new()
    });
    suggest(constraints, exclude, &pool)
        .into_iter()
        .cloned()
        .collect()
}
