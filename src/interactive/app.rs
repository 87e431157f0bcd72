//! TUI application state and logic

use crate::core::Word;
use crate::game::schedule::NOTICE_DURATION;
use crate::game::{
    Key, KeyOutcome, Notice, Phase, ScheduleId, ScheduledEvent, SubmitOutcome, Timeline, Transition,
    ValidationTicket, Validity,
};
use crate::services::{self, Definition, SourceError, WordSource};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::debug;

/// Longest wait between two redraws
const TICK: Duration = Duration::from_millis(50);
const MAX_MESSAGES: usize = 5;

/// Result of a lookup that ran as a spawned task
#[derive(Debug)]
pub enum TaskResult {
    Validation(ValidationTicket, Validity),
    Definition(Word, Definition),
    /// Definition of the target, requested as a clue for a generation
    Clue {
        generation: u64,
        target: Word,
        definition: Definition,
    },
    /// Suggestions computed from the rows submitted before `row`
    Suggestion {
        generation: u64,
        row: usize,
        candidates: Vec<Word>,
    },
    /// One target pool fetch for a pending new round
    Pool(Result<Vec<Word>, SourceError>),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    /// Transient messages disappear after this instant
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub timeline: Timeline,
    pub show_definition: bool,
    pub should_quit: bool,
    clue_pending: bool,
    suggestion_pending: bool,
    /// Pool fetches done for a new round that is being prepared
    round_request: Option<usize>,
    tx: UnboundedSender<TaskResult>,
    rx: UnboundedReceiver<TaskResult>,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let (tx, rx) = unbounded_channel();
        let mut app = Self {
            session,
            messages: Vec::new(),
            timeline: Timeline::new(),
            show_definition: false,
            should_quit: false,
            clue_pending: false,
            suggestion_pending: false,
            round_request: None,
            tx,
            rx,
        };
        app.add_message("Guess the five-letter word in six tries.", MessageStyle::Info);
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.push_message(Message {
            text: text.to_string(),
            style,
            expires_at: None,
        });
    }

    /// Show a notice for [`NOTICE_DURATION`]
    pub fn add_notice(&mut self, notice: Notice) {
        self.push_message(Message {
            text: notice.to_string(),
            style: MessageStyle::Error,
            expires_at: Some(Instant::now() + NOTICE_DURATION),
        });
    }

    fn push_message(&mut self, message: Message) {
        self.messages.push(message);
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn expire_messages(&mut self, now: Instant) {
        self.messages
            .retain(|m| m.expires_at.is_none_or(|deadline| deadline > now));
    }

    /// Definition to show in the side panel, if any
    #[must_use]
    pub fn visible_definition(&self) -> Option<&Definition> {
        let round = self.session.game().round();
        if round.is_over() {
            return self.session.cached_definition(round.target());
        }
        if self.show_definition {
            return self.session.last_row_definition();
        }
        None
    }

    /// Handle one key press
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key.code {
                match c.to_ascii_lowercase() {
                    'c' => self.request_clue(),
                    's' => self.request_suggestion(),
                    'n' => self.request_new_round(),
                    'r' => self.reveal_answer(),
                    'd' => self.toggle_definition(),
                    _ => {}
                }
            }
            return;
        }

        let round_over = self.session.game().round().is_over();
        let key = match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Enter if round_over => {
                self.request_new_round();
                return;
            }
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Char(c) => match Key::from_char(c) {
                Some(key) => key,
                None => return,
            },
            _ => return,
        };

        let outcome = self.session.game_mut().handle_key(key);
        self.on_key_outcome(outcome);
    }

    fn on_key_outcome(&mut self, outcome: KeyOutcome) {
        match outcome {
            KeyOutcome::Rejected(notice) => self.add_notice(notice),
            KeyOutcome::Validate(ticket) => self.spawn_validation(ticket),
            KeyOutcome::Ignored | KeyOutcome::Edited => {}
        }
    }

    fn spawn_validation(&self, ticket: ValidationTicket) {
        let source = self.session.source();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let validity = services::check_word(source.as_ref(), &ticket.word).await;
            let _ = tx.send(TaskResult::Validation(ticket, validity));
        });
    }

    fn spawn_definition(&self, word: Word) {
        if self.session.cached_definition(&word).is_some() {
            return;
        }
        let source = self.session.source();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let definition = services::fetch_definition(source.as_ref(), &word).await;
            let _ = tx.send(TaskResult::Definition(word, definition));
        });
    }

    /// Apply the result of a finished lookup
    pub fn on_task(&mut self, result: TaskResult) {
        match result {
            TaskResult::Validation(ticket, validity) => {
                match self.session.game_mut().complete_validation(&ticket, validity) {
                    SubmitOutcome::Accepted { schedule, .. } => {
                        self.timeline.push(&schedule, Instant::now());
                        self.spawn_definition(ticket.word);
                    }
                    SubmitOutcome::Rejected(notice) => self.add_notice(notice),
                    SubmitOutcome::Stale => {}
                }
            }
            TaskResult::Definition(word, definition) => {
                self.session.store_definition(word, definition);
            }
            TaskResult::Clue {
                generation,
                target,
                definition,
            } => {
                self.session.store_definition(target, definition.clone());
                if generation == self.session.game().generation() {
                    self.clue_pending = false;
                    self.session.apply_clue(&definition);
                }
            }
            TaskResult::Suggestion {
                generation,
                row,
                candidates,
            } => {
                let game = self.session.game();
                if generation != game.generation() {
                    debug!(generation, "discarding suggestions from an earlier round");
                    return;
                }
                self.suggestion_pending = false;
                if row != game.round().current_row() || game.phase() != Phase::AwaitingInput {
                    debug!(row, "discarding suggestions made before the latest row");
                    return;
                }
                match self.session.pick_suggestion(&candidates) {
                    Ok(word) => {
                        self.add_message(
                            &format!("Suggestion: {}", word.text()),
                            MessageStyle::Info,
                        );
                        let outcome = self.session.game_mut().apply_suggestion(&word);
                        self.on_key_outcome(outcome);
                    }
                    Err(notice) => self.add_notice(notice),
                }
            }
            TaskResult::Pool(fetched) => {
                let Some(fetches) = self.round_request.as_mut() else {
                    return;
                };
                *fetches += 1;
                self.session.fill_pool(fetched);
                self.continue_new_round();
            }
        }
    }

    /// Apply one due reveal event
    pub fn on_scheduled(&mut self, id: ScheduleId, event: ScheduledEvent) {
        match self.session.game_mut().apply_scheduled(id, event) {
            Transition::Won {
                row,
                score,
                streak,
                revealed,
            } => {
                let text = if revealed {
                    format!(
                        "The word was {}. Press Enter for a new word.",
                        self.session.game().round().target()
                    )
                } else {
                    format!(
                        "Solved in {}! +{score} points, streak {streak}. Press Enter for a new word.",
                        row + 1
                    )
                };
                self.add_message(&text, MessageStyle::Success);
                self.spawn_definition(self.session.game().round().target().clone());
            }
            Transition::Lost { target } => {
                self.add_message(
                    &format!("Out of rows! The word was {target}. Press Enter for a new word."),
                    MessageStyle::Error,
                );
                self.spawn_definition(target);
            }
            Transition::Stale
            | Transition::TileRevealed { .. }
            | Transition::Advanced { .. } => {}
        }
    }

    fn request_clue(&mut self) {
        let round = self.session.game().round();
        if round.clue().is_some() || self.clue_pending {
            return;
        }
        let target = round.target().clone();
        if let Some(definition) = self.session.cached_definition(&target).cloned() {
            self.session.apply_clue(&definition);
            return;
        }

        self.clue_pending = true;
        let generation = self.session.game().generation();
        let source = self.session.source();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let definition = services::fetch_definition(source.as_ref(), &target).await;
            let _ = tx.send(TaskResult::Clue {
                generation,
                target,
                definition,
            });
        });
    }

    fn request_suggestion(&mut self) {
        let round = self.session.game().round();
        if round.phase() != Phase::AwaitingInput || self.suggestion_pending {
            return;
        }
        let constraints = self.session.constraints();
        let exclude = round.used_suggestions().to_vec();
        let row = round.current_row();
        let generation = self.session.game().generation();

        self.suggestion_pending = true;
        let source = self.session.source();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let candidates =
                services::suggestion_candidates(source.as_ref(), &constraints, &exclude).await;
            let _ = tx.send(TaskResult::Suggestion {
                generation,
                row,
                candidates,
            });
        });
    }

    fn reveal_answer(&mut self) {
        if let Some(schedule) = self.session.reveal_answer() {
            self.timeline.push(&schedule, Instant::now());
        }
    }

    fn toggle_definition(&mut self) {
        if self.show_definition {
            self.show_definition = false;
        } else if self.session.last_row_definition().is_some() {
            self.show_definition = true;
        } else {
            self.add_message("No definition available yet", MessageStyle::Info);
        }
    }

    /// Prepare a new round; the pool is fetched in the background
    pub fn request_new_round(&mut self) {
        if self.round_request.is_some() {
            return;
        }
        self.round_request = Some(0);
        self.continue_new_round();
    }

    fn continue_new_round(&mut self) {
        let Some(fetches) = self.round_request else {
            return;
        };
        if !self.session.needs_pool_fetch(fetches) {
            self.round_request = None;
            self.deal_round();
            return;
        }

        if fetches == 0 {
            self.add_message("Loading a new word...", MessageStyle::Info);
        }
        let source = self.session.source();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let fetched = source.candidate_pool().await;
            let _ = tx.send(TaskResult::Pool(fetched));
        });
    }

    /// Start the new round; pending timers and lookups for the old one lapse
    fn deal_round(&mut self) {
        match self.session.deal_round() {
            Ok(()) => {
                self.timeline.clear();
                self.messages.clear();
                self.show_definition = false;
                self.clue_pending = false;
                self.suggestion_pending = false;
                self.add_message("New word! Good luck.", MessageStyle::Info);
            }
            Err(e) => self.add_notice(e.notice()),
        }
    }

    /// A new round is being prepared
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.round_request.is_some()
    }

    /// Fire due timers, drain finished lookups and drop expired notices
    pub fn tick(&mut self, now: Instant) {
        for (id, event) in self.timeline.due(now) {
            self.on_scheduled(id, event);
        }
        while let Ok(result) = self.rx.try_recv() {
            self.on_task(result);
        }
        self.expire_messages(now);
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        self.timeline
            .next_deadline()
            .map_or(TICK, |deadline| deadline.saturating_duration_since(now).min(TICK))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(session: Session) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, App::new(session));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if app.should_quit {
            break;
        }

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.on_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::EmbeddedWordSource;
    use crate::wordlists::loader::words_from_slice;
    use std::sync::Arc;

    async fn app_with(words: &[&str]) -> App {
        let source = Arc::new(EmbeddedWordSource::new(words_from_slice(words)));
        let session = Session::start(source, Some(7)).await.unwrap();
        App::new(session)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.on_key(press(KeyCode::Char(c)));
        }
        app.on_key(press(KeyCode::Enter));
    }

    /// Apply finished lookups until the pending new round is dealt
    async fn finish_loading(app: &mut App) {
        while app.is_loading() {
            let result = app.rx.recv().await.unwrap();
            app.on_task(result);
        }
    }

    /// Submit a word and let its reveal run to the end
    async fn play(app: &mut App, word: &Word) {
        type_word(app, word.text());
        let result = app.rx.recv().await.unwrap();
        app.on_task(result);
        app.tick(Instant::now() + Duration::from_secs(5));
    }

    fn decoy(app: &App) -> Word {
        let target = app.session.game().round().target();
        words_from_slice(&["crane", "slate", "pilot"])
            .into_iter()
            .find(|w| w != target)
            .unwrap()
    }

    #[tokio::test]
    async fn short_word_shows_transient_notice() {
        let mut app = app_with(&["crane"]).await;
        type_word(&mut app, "cra");

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Word must be 5 letters");
        assert!(last.expires_at.is_some());

        app.tick(Instant::now() + NOTICE_DURATION + Duration::from_millis(1));
        assert!(app.messages.iter().all(|m| m.text != "Word must be 5 letters"));
    }

    #[tokio::test]
    async fn validated_guess_is_revealed_by_the_timeline() {
        let mut app = app_with(&["crane"]).await;
        type_word(&mut app, "crane");

        let result = app.rx.recv().await.unwrap();
        app.on_task(result);
        assert!(!app.timeline.is_empty());

        app.tick(Instant::now() + Duration::from_secs(5));
        let round = app.session.game().round();
        assert!(round.is_won());
        assert!(round.rows()[0].is_fully_revealed());
    }

    #[tokio::test]
    async fn stale_validation_after_new_round_is_ignored() {
        let mut app = app_with(&["crane", "slate"]).await;
        type_word(&mut app, "slate");
        let result = app.rx.recv().await.unwrap();

        app.on_key(alt('n'));
        finish_loading(&mut app).await;
        app.on_task(result);

        assert!(app.timeline.is_empty());
        assert!(!app.session.game().round().rows()[0].is_submitted());
    }

    #[tokio::test]
    async fn input_stays_live_while_a_new_word_loads() {
        let mut app = app_with(&["crane", "slate", "pilot"]).await;
        let generation = app.session.game().generation();

        app.on_key(alt('n'));
        assert!(app.is_loading());
        assert_eq!(app.messages.last().unwrap().text, "Loading a new word...");

        // The old round still takes keys until the new word is dealt
        app.on_key(press(KeyCode::Char('a')));
        assert_eq!(app.session.game().round().current_guess(), "A");
        app.on_key(alt('n'));

        finish_loading(&mut app).await;
        assert_eq!(app.session.game().generation(), generation + 1);
        assert_eq!(app.session.game().round().current_guess(), "");
    }

    #[tokio::test]
    async fn suggestion_from_an_earlier_row_is_dropped() {
        let mut app = app_with(&["crane", "slate", "pilot"]).await;
        let generation = app.session.game().generation();
        let decoy = decoy(&app);

        play(&mut app, &decoy).await;
        assert_eq!(app.session.game().round().current_row(), 1);

        app.on_task(TaskResult::Suggestion {
            generation,
            row: 0,
            candidates: vec![decoy],
        });
        let round = app.session.game().round();
        assert_eq!(round.phase(), Phase::AwaitingInput);
        assert_eq!(round.current_guess(), "");
        assert!(round.used_suggestions().is_empty());

        let target = round.target().clone();
        app.on_task(TaskResult::Suggestion {
            generation,
            row: 1,
            candidates: vec![target.clone()],
        });
        let round = app.session.game().round();
        assert_eq!(round.phase(), Phase::Validating);
        assert_eq!(round.current_guess(), target.text());
    }

    #[tokio::test]
    async fn alt_r_reveals_and_enter_starts_next_round() {
        let mut app = app_with(&["crane", "slate"]).await;
        let generation = app.session.game().generation();

        app.on_key(alt('r'));
        app.tick(Instant::now() + Duration::from_secs(5));
        assert!(app.session.game().round().is_over());
        assert_eq!(app.session.game().round().revealed_answer_row(), Some(0));

        app.on_key(press(KeyCode::Enter));
        finish_loading(&mut app).await;
        assert_ne!(app.session.game().generation(), generation);
        assert!(!app.session.game().round().is_over());
    }

    #[tokio::test]
    async fn escape_quits() {
        let mut app = app_with(&["crane"]).await;
        app.on_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
