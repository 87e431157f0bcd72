//! Runtime configuration and logging setup

use crate::services::{EmbeddedWordSource, HttpWordSource, SourceError, WordSource};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

pub const DATAMUSE_URL: &str = "https://api.datamuse.com/words";
pub const DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";
pub const WORDFINDER_URL: &str = "https://fly.wordfinderapi.com/api/search";

/// Where words, definitions and dictionary checks come from
#[derive(Debug, Clone, Args)]
pub struct SourceConfig {
    /// Play without network access, using the built-in word list
    #[arg(long, global = true, env = "WORDLE_OFFLINE")]
    pub offline: bool,

    /// Offline word list file (one five-letter word per line)
    #[arg(long, global = true, env = "WORDLE_WORD_LIST")]
    pub word_list: Option<PathBuf>,

    /// Datamuse endpoint for the target pool
    #[arg(long, global = true, env = "WORDLE_DATAMUSE_URL", default_value = DATAMUSE_URL)]
    pub datamuse_url: String,

    /// Dictionary endpoint for definitions and word checks
    #[arg(long, global = true, env = "WORDLE_DICTIONARY_URL", default_value = DICTIONARY_URL)]
    pub dictionary_url: String,

    /// WordFinder endpoint for suggestions
    #[arg(long, global = true, env = "WORDLE_WORDFINDER_URL", default_value = WORDFINDER_URL)]
    pub wordfinder_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "WORDLE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            offline: false,
            word_list: None,
            datamuse_url: DATAMUSE_URL.to_string(),
            dictionary_url: DICTIONARY_URL.to_string(),
            wordfinder_url: WORDFINDER_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl SourceConfig {
    /// Build the configured word source
    ///
    /// A word list file implies offline play.
    ///
    /// # Errors
    /// Returns an error if the word list cannot be read or the HTTP client
    /// cannot be built.
    pub fn build_source(&self) -> Result<Arc<dyn WordSource>, SourceError> {
        if let Some(path) = &self.word_list {
            return Ok(Arc::new(EmbeddedWordSource::from_file(path)?));
        }
        if self.offline {
            return Ok(Arc::new(EmbeddedWordSource::embedded()));
        }
        Ok(Arc::new(HttpWordSource::new(self)?))
    }
}

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// Nothing is logged (full-screen UI without a log file)
    Disabled,
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `level`.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_logging(level: &str, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_game={level},wordle={level}")));

    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        source: SourceConfig,
    }

    #[test]
    fn defaults_match_public_endpoints() {
        let cli = TestCli::parse_from(["wordle"]);
        assert_eq!(cli.source.datamuse_url, DATAMUSE_URL);
        assert_eq!(cli.source.dictionary_url, DICTIONARY_URL);
        assert_eq!(cli.source.wordfinder_url, WORDFINDER_URL);
        assert_eq!(cli.source.timeout_secs, 10);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::parse_from([
            "wordle",
            "--offline",
            "--timeout-secs",
            "3",
            "--dictionary-url",
            "http://localhost:9000/entries",
        ]);
        assert!(cli.source.offline);
        assert_eq!(cli.source.timeout_secs, 3);
        assert_eq!(cli.source.dictionary_url, "http://localhost:9000/entries");
    }

    #[test]
    fn offline_builds_embedded_source() {
        let config = SourceConfig {
            offline: true,
            ..SourceConfig::default()
        };
        let source = config.build_source().unwrap();
        assert_eq!(source.name(), "offline");
    }
}
