//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Tiles are printed one at a time
//! following the reveal schedule.

use crate::core::WORD_LENGTH;
use crate::game::{
    Key, KeyOutcome, Notice, Phase, RevealSchedule, SubmitOutcome, Transition,
};
use crate::output::formatters::tile;
use crate::output::{print_board, print_definition, print_keyboard, print_score_line, print_standing};
use crate::services::Definition;
use crate::session::{Press, Session};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Guess(&'a str),
    New,
    Reveal,
    Clue,
    Suggest,
    Define(Option<&'a str>),
    Standing,
    Help,
    Quit,
    Empty,
}

impl<'a> Command<'a> {
    /// Parse a trimmed input line; anything unrecognised is a guess
    #[must_use]
    pub fn parse(input: &'a str) -> Self {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Self::Empty;
        };
        match head.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "reveal" => Self::Reveal,
            "clue" => Self::Clue,
            "suggest" | "hint" => Self::Suggest,
            "define" => Self::Define(parts.next()),
            "standing" => Self::Standing,
            "help" | "?" => Self::Help,
            _ => Self::Guess(head),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run_simple(mut session: Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    show_round(&session);

    loop {
        prompt(&session)?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(line.trim()) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Standing => print_standing(session.game().standing()),
            Command::New => match session.new_round().await {
                Ok(()) => {
                    println!("\n🔄 New round started!\n");
                    show_round(&session);
                }
                Err(e) => print_notice(e.notice()),
            },
            Command::Reveal => match session.reveal_answer() {
                Some(schedule) => {
                    animate(&mut session, &schedule).await?;
                }
                None => println!("The round is already over. Type 'new' to play again."),
            },
            Command::Clue => {
                let clue = session.clue().await;
                println!("🔍 Clue: {}", clue.italic().bright_blue());
            }
            Command::Suggest if session.game().round().is_over() => {
                println!("The round is over. Type 'new' to play again.");
            }
            Command::Suggest => match session.suggest().await {
                Ok((word, press)) => {
                    println!("💡 Suggestion: {}", word.text().bright_yellow().bold());
                    handle_press(&mut session, press).await?;
                }
                Err(notice) => print_notice(notice),
            },
            Command::Define(word) => define(&mut session, word).await,
            Command::Guess(text) => guess(&mut session, text).await?,
        }
    }

    println!("\n👋 Thanks for playing!\n");
    print_standing(session.game().standing());
    Ok(())
}

async fn guess(session: &mut Session, text: &str) -> Result<()> {
    if session.game().round().is_over() {
        println!("The round is over. Type 'new' to play again.");
        return Ok(());
    }
    if text.chars().count() != WORD_LENGTH {
        print_notice(Notice::WordTooShort);
        return Ok(());
    }
    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("{}", "Use letters A-Z only".red());
        return Ok(());
    }

    while !session.game().round().current_guess().is_empty() {
        session.press(Key::Backspace).await;
    }
    for key in text.chars().filter_map(Key::from_char) {
        session.press(key).await;
    }
    let press = session.press(Key::Enter).await;
    handle_press(session, press).await
}

async fn handle_press(session: &mut Session, press: Press) -> Result<()> {
    match press {
        Press::Key(KeyOutcome::Rejected(notice))
        | Press::Submitted(SubmitOutcome::Rejected(notice)) => print_notice(notice),
        Press::Submitted(SubmitOutcome::Accepted { cost, schedule, .. }) => {
            let transition = animate(session, &schedule).await?;
            println!(
                "   -{} points",
                cost.total().to_string().bright_red()
            );
            if matches!(transition, Transition::Advanced { .. }) {
                println!();
                print_keyboard(session.game());
                print_score_line(session.game());
            }
        }
        Press::Key(_) | Press::Submitted(SubmitOutcome::Stale) => {}
    }
    Ok(())
}

/// Print a row tile by tile on the schedule's clock, then report the settle
async fn animate(session: &mut Session, schedule: &RevealSchedule) -> Result<Transition> {
    let start = Instant::now();
    let mut last = Transition::Stale;
    print!("  ");

    for &(delay, event) in schedule.steps() {
        tokio::time::sleep_until(start + delay).await;
        last = session.game_mut().apply_scheduled(schedule.id(), event);

        if let Transition::TileRevealed {
            row,
            position,
            outcome,
        } = last
        {
            let letter = session.game().round().rows()[row]
                .guess()
                .map_or(b'?', |g| g.char_at(position));
            print!("{}", tile(letter, outcome));
            io::stdout().flush()?;
        }
    }
    println!();

    match &last {
        Transition::Won {
            row,
            score,
            streak,
            revealed,
        } => {
            if *revealed {
                println!(
                    "\n🏳️  The word was {}",
                    session.game().round().target().text().bright_yellow().bold()
                );
            } else {
                println!(
                    "\n{} in {} {}!",
                    "🎉 Solved".bright_green().bold(),
                    row + 1,
                    if *row == 0 { "row" } else { "rows" }
                );
            }
            println!("   Round score: {score}  Streak: {streak}");
            finish_round(session).await;
        }
        Transition::Lost { target } => {
            println!(
                "\n❌ Out of rows. The word was {}",
                target.text().bright_yellow().bold()
            );
            finish_round(session).await;
        }
        _ => {}
    }
    Ok(last)
}

async fn finish_round(session: &mut Session) {
    let target = session.game().round().target().clone();
    let definition = session.definition(&target).await;
    if definition.is_available() {
        print_definition(&definition);
    }
    print_score_line(session.game());
    println!("Type 'new' for another round.");
}

async fn define(session: &mut Session, word: Option<&str>) {
    let definition: Option<Definition> = match word {
        Some(text) => match crate::core::Word::new(text) {
            Ok(word) => Some(session.definition(&word).await),
            Err(e) => {
                println!("{}", e.to_string().red());
                return;
            }
        },
        None => session.last_row_definition().cloned(),
    };

    match definition {
        Some(definition) => print_definition(&definition),
        None => println!("No definition to show yet."),
    }
}

fn show_round(session: &Session) {
    print_board(session.game());
    print_score_line(session.game());
}

fn prompt(session: &Session) -> Result<()> {
    let round = session.game().round();
    let label = match round.phase() {
        Phase::Won | Phase::Lost => "Round over".to_string(),
        _ => format!("Row {}", round.current_row() + 1),
    };
    print!("\n{label} > ");
    io::stdout().flush()?;
    Ok(())
}

fn print_notice(notice: Notice) {
    println!("{}", format!("⚠ {notice}").red());
}

fn print_help() {
    println!("Type a five-letter word and press Enter to guess.");
    println!("Commands:");
    println!("  clue            show a clue for the target");
    println!("  suggest         play a word that fits what you know");
    println!("  reveal          give up and show the answer");
    println!("  define [WORD]   definition of a word (default: last guess)");
    println!("  new             start a new round");
    println!("  standing        session statistics");
    println!("  quit            leave\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("Q"), Command::Quit);
        assert_eq!(Command::parse("new"), Command::New);
        assert_eq!(Command::parse("define crane"), Command::Define(Some("crane")));
        assert_eq!(Command::parse("define"), Command::Define(None));
        assert_eq!(Command::parse("standing"), Command::Standing);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(Command::parse("crane"), Command::Guess("crane"));
        assert_eq!(Command::parse("cra"), Command::Guess("cra"));
        assert_eq!(Command::parse("stats"), Command::Guess("stats"));
    }
}
