//! Wordle - CLI
//!
//! Single-player Wordle with a TUI, a line-based mode and a few offline
//! tools for checking evaluations and scores.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_game::{
    commands::{SimulationConfig, evaluate_guess, run_simple, run_simulation},
    config::{LogTarget, SourceConfig, init_logging},
    core::Word,
    interactive::run_tui,
    output::{print_evaluation_report, print_simulation_result},
    session::Session,
    wordlists::{WORDS, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries, with scoring, streaks, clues and suggestions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for target selection (reproducible rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level: error, warn, info, debug, trace (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file (the TUI logs nothing otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    source: SourceConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Evaluate a guess against a target and show the row cost
    Evaluate {
        /// The guessed word
        guess: String,
        /// The target word
        target: String,
    },

    /// Play rounds automatically over the word list
    Simulate {
        /// Limit number of rounds
        #[arg(short, long)]
        limit: Option<usize>,

        /// Opening guess for every round
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Play, None) => LogTarget::Disabled,
        (_, None) => LogTarget::Stderr,
    };
    init_logging(&cli.log_level, log_target)?;

    match command {
        Commands::Play => {
            let session = start_session(&cli.source, cli.seed).await?;
            // The UI loop polls the terminal; lookups run on the other workers
            tokio::task::block_in_place(|| run_tui(session))
        }
        Commands::Simple => {
            let session = start_session(&cli.source, cli.seed).await?;
            run_simple(session).await
        }
        Commands::Evaluate { guess, target } => {
            let report = evaluate_guess(&guess, &target)?;
            print_evaluation_report(&report);
            Ok(())
        }
        Commands::Simulate { limit, first_word } => {
            run_simulate_command(&cli.source, limit, first_word.as_deref(), cli.seed)
        }
    }
}

async fn start_session(source: &SourceConfig, seed: Option<u64>) -> Result<Session> {
    let source = source
        .build_source()
        .context("Failed to set up the word source")?;
    info!(source = source.name(), "starting session");
    Session::start(source, seed)
        .await
        .context("Error loading word. Please try again.")
}

fn run_simulate_command(
    source: &SourceConfig,
    limit: Option<usize>,
    first_word: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let words = match &source.word_list {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };
    let first_word = first_word
        .map(Word::new)
        .transpose()
        .context("Invalid first word")?;

    let config = SimulationConfig {
        limit,
        first_word,
        seed,
    };
    let stats = run_simulation(&words, &config);
    print_simulation_result(&stats);
    Ok(())
}
