//! Session: the game plus everything that outlives a round
//!
//! A [`Session`] owns the word source handle, the target pool, the
//! definition cache, the random generator and the [`Game`]. Front-ends that
//! can afford to wait call the async methods directly; the TUI runs the
//! lookups as tasks (see [`crate::services::check_word`] and friends) and
//! feeds the results back through the synchronous methods.

use crate::core::{MAX_ROWS, Word};
use crate::game::{
    Game, Key, KeyOutcome, Notice, RevealSchedule, SubmitOutcome, Transition, ValidationTicket,
};
use crate::services::{
    self, Definition, DefinitionCache, MAX_POOL_FETCHES, MIN_AVAILABLE, SourceError, WordPool,
    WordSource,
};
use crate::suggest::Constraints;
use crate::wordlists::{FALLBACK, loader};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no target word available")]
    NoTarget,
}

impl SessionError {
    /// Message shown to the player
    #[must_use]
    pub const fn notice(&self) -> Notice {
        match self {
            Self::NoTarget => Notice::LoadFailed,
        }
    }
}

/// Result of pressing a key with the dictionary check run inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Press {
    Key(KeyOutcome),
    Submitted(SubmitOutcome),
}

pub struct Session {
    source: Arc<dyn WordSource>,
    pool: WordPool,
    definitions: DefinitionCache,
    rng: StdRng,
    game: Game,
}

impl Session {
    /// Draw the first target and open a session
    ///
    /// # Errors
    /// Returns [`SessionError::NoTarget`] if no target could be drawn.
    pub async fn start(source: Arc<dyn WordSource>, seed: Option<u64>) -> Result<Self, SessionError> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut pool = WordPool::new();
        let target = draw_target(source.as_ref(), &mut pool, &mut rng).await?;
        info!(source = source.name(), "session started");

        Ok(Self {
            source,
            pool,
            definitions: DefinitionCache::new(),
            rng,
            game: Game::new(target),
        })
    }

    /// Shared handle to the word source, for spawned lookups
    #[must_use]
    pub fn source(&self) -> Arc<dyn WordSource> {
        Arc::clone(&self.source)
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Start a new round with a freshly drawn target
    ///
    /// # Errors
    /// Returns [`SessionError::NoTarget`] if no target could be drawn; the
    /// current round is left untouched.
    pub async fn new_round(&mut self) -> Result<(), SessionError> {
        let target = draw_target(self.source.as_ref(), &mut self.pool, &mut self.rng).await?;
        self.game.reset(target);
        Ok(())
    }

    /// Whether a new round needs another pool fetch first
    ///
    /// For front-ends that fetch in the background: call with the number of
    /// fetches done so far, hand each result to [`Session::fill_pool`], then
    /// finish with [`Session::deal_round`].
    #[must_use]
    pub fn needs_pool_fetch(&self, fetches: usize) -> bool {
        wants_fetch(&self.pool, fetches)
    }

    /// Store a fetched candidate pool, falling back to the built-in words
    pub fn fill_pool(&mut self, fetched: Result<Vec<Word>, SourceError>) {
        refill(self.source.name(), &mut self.pool, fetched);
    }

    /// Start a new round from the pool as it is, without fetching
    ///
    /// # Errors
    /// Returns [`SessionError::NoTarget`] if no target could be drawn; the
    /// current round is left untouched.
    pub fn deal_round(&mut self) -> Result<(), SessionError> {
        let target = draw(&mut self.pool, &mut self.rng)?;
        self.game.reset(target);
        Ok(())
    }

    /// Press a key, running any dictionary check to completion
    ///
    /// Accepted guesses also get their definition prefetched.
    pub async fn press(&mut self, key: Key) -> Press {
        match self.game.handle_key(key) {
            KeyOutcome::Validate(ticket) => Press::Submitted(self.finish_submit(ticket).await),
            other => Press::Key(other),
        }
    }

    async fn finish_submit(&mut self, ticket: ValidationTicket) -> SubmitOutcome {
        let validity = services::check_word(self.source.as_ref(), &ticket.word).await;
        let outcome = self.game.complete_validation(&ticket, validity);
        if matches!(outcome, SubmitOutcome::Accepted { .. }) {
            self.definition(&ticket.word).await;
        }
        outcome
    }

    /// Definition of a word, from the cache or the source
    ///
    /// Failures are cached as the placeholder so they are not retried.
    pub async fn definition(&mut self, word: &Word) -> Definition {
        if let Some(cached) = self.definitions.get(word) {
            return cached.clone();
        }
        let definition = services::fetch_definition(self.source.as_ref(), word).await;
        self.store_definition(word.clone(), definition.clone());
        definition
    }

    /// Put a definition fetched elsewhere into the cache
    pub fn store_definition(&mut self, word: Word, definition: Definition) {
        debug!(%word, available = definition.is_available(), "definition cached");
        self.definitions.insert(word, definition);
    }

    #[must_use]
    pub fn cached_definition(&self, word: &Word) -> Option<&Definition> {
        self.definitions.get(word)
    }

    /// Real definition for a submitted row, if one is cached
    #[must_use]
    pub fn row_definition(&self, row: usize) -> Option<&Definition> {
        let word = self.game.round().rows().get(row)?.guess()?;
        self.definitions.available(word)
    }

    /// Definition of the most recent submitted row, if cached
    #[must_use]
    pub fn last_row_definition(&self) -> Option<&Definition> {
        (0..MAX_ROWS)
            .rev()
            .find(|&row| self.game.round().rows()[row].is_submitted())
            .and_then(|row| self.row_definition(row))
    }

    /// The clue for this round, fetched once
    pub async fn clue(&mut self) -> String {
        if let Some(clue) = self.game.round().clue() {
            return clue.to_string();
        }
        let target = self.game.round().target().clone();
        let definition = self.definition(&target).await;
        self.apply_clue(&definition)
    }

    /// Record the clue from a definition of the target
    pub fn apply_clue(&mut self, definition: &Definition) -> String {
        self.game.set_clue(definition.clue()).to_string()
    }

    /// Constraints implied by the rows submitted so far
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints::from_rows(self.game.round().submitted())
    }

    /// Pick a suggestion and submit it as the current guess
    ///
    /// Returns the suggested word together with what happened to it.
    ///
    /// # Errors
    /// Returns [`Notice::NoSuggestions`] when nothing new matches.
    pub async fn suggest(&mut self) -> Result<(Word, Press), Notice> {
        let constraints = self.constraints();
        let exclude = self.game.round().used_suggestions().to_vec();
        let candidates =
            services::suggestion_candidates(self.source.as_ref(), &constraints, &exclude).await;
        let word = self.pick_suggestion(&candidates)?;

        let press = match self.game.apply_suggestion(&word) {
            KeyOutcome::Validate(ticket) => Press::Submitted(self.finish_submit(ticket).await),
            other => Press::Key(other),
        };
        Ok((word, press))
    }

    /// Choose one unused suggestion at random
    ///
    /// # Errors
    /// Returns [`Notice::NoSuggestions`] when every candidate was used already.
    pub fn pick_suggestion(&mut self, candidates: &[Word]) -> Result<Word, Notice> {
        let used = self.game.round().used_suggestions();
        let fresh: Vec<&Word> = candidates.iter().filter(|w| !used.contains(w)).collect();
        fresh
            .choose(&mut self.rng)
            .map(|&w| w.clone())
            .ok_or(Notice::NoSuggestions)
    }

    /// Give up: show the answer and close the round as won
    pub fn reveal_answer(&mut self) -> Option<RevealSchedule> {
        self.game.reveal_answer()
    }

    /// Apply a whole reveal schedule at once and return its final step
    ///
    /// Ending the round prefetches the target's definition.
    pub async fn settle(&mut self, schedule: &RevealSchedule) -> Transition {
        let transition = self.game.finish_schedule(schedule);
        if matches!(transition, Transition::Won { .. } | Transition::Lost { .. }) {
            let target = self.game.round().target().clone();
            self.definition(&target).await;
        }
        transition
    }
}

/// Whether the pool should be fetched again before drawing
///
/// The first fetch happens when the pool is short; further fetches while
/// too few unplayed words remain, up to [`MAX_POOL_FETCHES`].
fn wants_fetch(pool: &WordPool, fetches: usize) -> bool {
    fetches < MAX_POOL_FETCHES
        && ((fetches == 0 && pool.needs_refill()) || pool.available() < MIN_AVAILABLE)
}

/// Draw a target from the pool, refilling it from the source as needed
async fn draw_target(
    source: &dyn WordSource,
    pool: &mut WordPool,
    rng: &mut StdRng,
) -> Result<Word, SessionError> {
    let mut fetches = 0;
    while wants_fetch(pool, fetches) {
        debug!(available = pool.available(), fetches, "fetching target pool");
        let fetched = source.candidate_pool().await;
        refill(source.name(), pool, fetched);
        fetches += 1;
    }
    draw(pool, rng)
}

/// Draw from whatever the pool holds, recycling played words if it runs dry
fn draw(pool: &mut WordPool, rng: &mut StdRng) -> Result<Word, SessionError> {
    if pool.available() < MIN_AVAILABLE {
        debug!(played = pool.played(), "recycling played targets");
        pool.recycle();
    }
    let target = pool.draw(rng).ok_or_else(|| {
        warn!(pool = pool.len(), played = pool.played(), "no unplayed target left");
        SessionError::NoTarget
    })?;
    debug!(pool = pool.len(), "target drawn");
    Ok(target)
}

fn refill(source: &str, pool: &mut WordPool, fetched: Result<Vec<Word>, SourceError>) {
    let words = match fetched {
        Ok(words) if !words.is_empty() => words,
        Ok(_) => {
            warn!(source, "empty candidate pool, using fallback words");
            loader::words_from_slice(FALLBACK)
        }
        Err(e) => {
            warn!(source, error = %e, "candidate pool fetch failed, using fallback words");
            loader::words_from_slice(FALLBACK)
        }
    };
    info!(count = words.len(), "target pool refilled");
    pool.replace(words);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use crate::services::Sense;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fixed pool with a tiny dictionary
    struct Stub {
        pool: Vec<Word>,
        dictionary: Vec<Word>,
        pool_fetches: AtomicUsize,
        fail_pool: bool,
    }

    impl Stub {
        fn new(pool: &[&str], dictionary: &[&str]) -> Self {
            Self {
                pool: loader::words_from_slice(pool),
                dictionary: loader::words_from_slice(dictionary),
                pool_fetches: AtomicUsize::new(0),
                fail_pool: false,
            }
        }
    }

    #[async_trait]
    impl WordSource for Stub {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn candidate_pool(&self) -> Result<Vec<Word>, SourceError> {
            self.pool_fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_pool {
                return Err(SourceError::Empty("stub"));
            }
            Ok(self.pool.clone())
        }

        async fn is_word_valid(&self, word: &Word) -> Result<bool, SourceError> {
            Ok(self.dictionary.contains(word))
        }

        async fn definition(&self, word: &Word) -> Result<Definition, SourceError> {
            if word.text() == "CRANE" {
                Ok(Definition::new(
                    "CRANE",
                    None,
                    vec![Sense {
                        part_of_speech: Some("noun".to_string()),
                        definition: "A wading bird.".to_string(),
                        example: None,
                    }],
                ))
            } else {
                Err(SourceError::NotFound(word.to_string()))
            }
        }
    }

    async fn session(stub: Stub) -> Session {
        Session::start(Arc::new(stub), Some(42)).await.unwrap()
    }

    async fn type_and_submit(session: &mut Session, text: &str) -> Press {
        for c in text.chars() {
            session.press(Key::from_char(c).unwrap()).await;
        }
        session.press(Key::Enter).await
    }

    #[tokio::test]
    async fn target_comes_from_pool() {
        let session = session(Stub::new(&["crane"], &["crane"])).await;
        assert_eq!(session.game().round().target().text(), "CRANE");
    }

    #[tokio::test]
    async fn failing_pool_falls_back_to_builtin_words() {
        let mut stub = Stub::new(&[], &[]);
        stub.fail_pool = true;
        let session = session(stub).await;

        let target = session.game().round().target().text().to_string();
        assert!(FALLBACK.contains(&target.as_str()));
    }

    #[tokio::test]
    async fn small_pool_is_refetched_a_bounded_number_of_times() {
        let stub = Arc::new(Stub::new(&["crane", "slate"], &[]));
        let source: Arc<dyn WordSource> = stub.clone();
        let mut session = Session::start(source, Some(1)).await.unwrap();
        assert_eq!(stub.pool_fetches.load(Ordering::SeqCst), MAX_POOL_FETCHES);

        // Once both words are played they come back, never twice in a row
        let mut previous = session.game().round().target().clone();
        for _ in 0..4 {
            session.new_round().await.unwrap();
            let target = session.game().round().target().clone();
            assert_ne!(target, previous);
            previous = target;
        }
        assert_eq!(SessionError::NoTarget.notice(), Notice::LoadFailed);
    }

    #[tokio::test]
    async fn offline_play_outlasts_the_fallback_list() {
        let mut stub = Stub::new(&[], &[]);
        stub.fail_pool = true;
        let mut session = session(stub).await;

        let mut previous = session.game().round().target().clone();
        for round in 0..(FALLBACK.len() * 2) {
            assert!(session.new_round().await.is_ok(), "round {round} failed");
            let target = session.game().round().target().clone();
            assert!(FALLBACK.contains(&target.text()));
            assert_ne!(target, previous);
            previous = target;
        }
    }

    #[tokio::test]
    async fn background_fetches_deal_the_same_way() {
        let stub = Arc::new(Stub::new(&["crane", "slate"], &[]));
        let source: Arc<dyn WordSource> = stub.clone();
        let mut session = Session::start(source, Some(9)).await.unwrap();
        let first = session.game().round().target().clone();
        let generation = session.game().generation();

        let mut fetches = 0;
        while session.needs_pool_fetch(fetches) {
            let fetched = stub.candidate_pool().await;
            session.fill_pool(fetched);
            fetches += 1;
        }
        assert_eq!(fetches, MAX_POOL_FETCHES);

        session.deal_round().unwrap();
        assert_eq!(session.game().generation(), generation + 1);
        assert_ne!(session.game().round().target(), &first);
    }

    #[tokio::test]
    async fn winning_submission_runs_the_whole_round() {
        let mut session = session(Stub::new(&["crane"], &["crane"])).await;

        let Press::Submitted(SubmitOutcome::Accepted { schedule, .. }) =
            type_and_submit(&mut session, "crane").await
        else {
            panic!("crane should be accepted");
        };
        assert_eq!(
            session.settle(&schedule).await,
            Transition::Won {
                row: 0,
                score: 25,
                streak: 1,
                revealed: false
            }
        );
        assert_eq!(
            session.row_definition(0).map(Definition::clue),
            Some("A wading bird.".to_string())
        );
    }

    #[tokio::test]
    async fn unknown_word_is_rejected_without_using_a_row() {
        let mut session = session(Stub::new(&["crane"], &["crane"])).await;

        let press = type_and_submit(&mut session, "slate").await;
        assert_eq!(
            press,
            Press::Submitted(SubmitOutcome::Rejected(Notice::NotInWordList))
        );
        assert_eq!(session.game().round().current_row(), 0);
        assert!(session.game().round().is_invalid_guess());
    }

    #[tokio::test]
    async fn clue_is_fetched_once() {
        let mut session = session(Stub::new(&["crane"], &["crane"])).await;
        assert_eq!(session.clue().await, "A wading bird.");
        assert_eq!(session.game().round().clue(), Some("A wading bird."));
        assert_eq!(session.clue().await, "A wading bird.");
    }

    #[tokio::test]
    async fn failed_definitions_are_cached_as_placeholders() {
        let mut session = session(Stub::new(&["crane"], &["crane", "slate"])).await;
        let slate = Word::new("slate").unwrap();

        let definition = session.definition(&slate).await;
        assert!(!definition.is_available());
        assert!(session.cached_definition(&slate).is_some());

        // An accepted row with only a placeholder offers no definition
        type_and_submit(&mut session, "slate").await;
        assert!(session.row_definition(0).is_none());
        assert!(session.last_row_definition().is_none());
    }

    #[tokio::test]
    async fn suggestion_is_submitted_and_never_repeated() {
        let mut session = session(Stub::new(&["crane"], &["crane"])).await;

        let (word, press) = session.suggest().await.unwrap();
        assert_eq!(word.text(), "CRANE");
        assert!(matches!(
            press,
            Press::Submitted(SubmitOutcome::Accepted { row: 0, .. })
        ));
        assert_eq!(session.game().phase(), Phase::Revealing);

        let candidates = loader::words_from_slice(&["crane"]);
        assert_eq!(
            session.pick_suggestion(&candidates),
            Err(Notice::NoSuggestions)
        );
    }

    #[tokio::test]
    async fn reveal_answer_closes_round() {
        let mut session = session(Stub::new(&["crane"], &["crane"])).await;
        let schedule = session.reveal_answer().unwrap();
        assert!(matches!(
            session.settle(&schedule).await,
            Transition::Won { revealed: true, .. }
        ));
        assert!(session.cached_definition(&Word::new("crane").unwrap()).is_some());
        assert_eq!(
            session.game().round().rows()[0].guess(),
            Some(session.game().round().target())
        );
    }
}
