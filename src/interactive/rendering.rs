//! TUI rendering with ratatui
//!
//! Board, keyboard hints and side panels for a round in progress.

use super::app::{App, MessageStyle};
use crate::core::{MAX_ROWS, Outcome, WORD_LENGTH};
use crate::game::{Phase, Row};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::services::Definition;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ROWS as u16 + 2), // Grid
            Constraint::Length(5),                   // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn outcome_style(outcome: Outcome) -> Style {
    let bg = match outcome {
        Outcome::Correct => Color::Green,
        Outcome::WrongPosition => Color::Yellow,
        Outcome::Incorrect => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn grid_line<'a>(app: &App, index: usize, row: &Row) -> Line<'a> {
    let round = app.session.game().round();
    let is_current = index == round.current_row() && !round.is_over();
    let typed = round.current_guess().as_bytes();

    let mut spans: Vec<Span> = (0..WORD_LENGTH)
        .map(|position| {
            let letter = match row.guess() {
                Some(word) => Some(word.char_at(position)),
                None if is_current => typed.get(position).copied(),
                None => None,
            };
            let text = format!(" {} ", letter.map_or('·', char::from));

            let style = match row.visible_outcome(position) {
                Some(outcome) => outcome_style(outcome),
                None if is_current && round.is_invalid_guess() => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                None if letter.is_some() => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::DarkGray),
            };
            Span::styled(text, style)
        })
        .collect();

    if round.revealed_answer_row() == Some(index) {
        spans.push(Span::styled(
            "  ◀ answer",
            Style::default().fg(Color::Magenta),
        ));
    } else if row.is_fully_revealed()
        && let Some(cost) = row.cost()
    {
        spans.push(Span::styled(
            format!("  -{}", cost.total()),
            Style::default().fg(Color::Red),
        ));
    } else if is_current && round.phase() == Phase::Validating {
        spans.push(Span::styled("  …", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .session
        .game()
        .round()
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| grid_line(app, index, row))
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.session.game().round().letter_states();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let text = format!(" {} ", char::from(letter));
                    match states.get(letter) {
                        Some(outcome) => Span::styled(text, outcome_style(outcome)),
                        None => Span::raw(text),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Score
            Constraint::Length(4), // Clue
            Constraint::Min(4),    // Definition
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_clue(f, app, chunks[1]);
    render_definition(f, app.visible_definition(), chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let standing = game.standing();
    let content = vec![
        Line::from(vec![
            Span::raw("Round score: "),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Total score: {}", standing.total_score)),
        Line::from(format!(
            "Streak: {}  (best {})",
            standing.streak, standing.best_streak
        )),
        Line::from(format!(
            "Rounds: {}  Won: {}",
            standing.rounds_played, standing.rounds_won
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_clue(f: &mut Frame, app: &App, area: Rect) {
    let text = app
        .session
        .game()
        .round()
        .clue()
        .unwrap_or("Alt+C for a clue");

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::LightBlue))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Clue ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_definition(f: &mut Frame, definition: Option<&Definition>, area: Rect) {
    let block = Block::default().title(" Definition ").borders(Borders::ALL);
    let Some(definition) = definition else {
        f.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut heading = vec![Span::styled(
        definition.word.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(phonetic) = &definition.phonetic {
        heading.push(Span::raw(format!("  {phonetic}")));
    }

    let mut lines = vec![Line::from(heading)];
    for sense in &definition.senses {
        let mut spans = Vec::new();
        if let Some(part) = &sense.part_of_speech {
            spans.push(Span::styled(
                format!("({part}) "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(sense.definition.clone()));
        lines.push(Line::from(spans));
        if let Some(example) = &sense.example {
            lines.push(Line::from(Span::styled(
                format!("  \"{example}\""),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.is_loading() {
        "Loading a new word... | Esc: Quit"
    } else if app.session.game().round().is_over() {
        "Enter: Next word | Alt+D: Definition | Esc: Quit"
    } else {
        "Enter: Submit | Alt+C: Clue | Alt+S: Suggest | Alt+R: Reveal | Alt+N: New | Alt+D: Definition | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
