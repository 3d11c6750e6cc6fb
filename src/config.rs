//! Runtime configuration
//!
//! Seeds and word-list sources come from flags or the environment, the same
//! way for every command. Game options are per `play` invocation.

use crate::error::ConfigError;
use crate::game::{DEFAULT_TRIES, GameOptions};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{SECRETS, Seed, WORDS, WordStore};
use chrono::NaiveDate;
use clap::Args;
use log::{LevelFilter, info};
use std::path::PathBuf;

pub const DEFAULT_DAILY_SEED: &str = "wordle-daily";
pub const DEFAULT_VALID_WORDS_SEED: &str = "wordle-valid";

/// Where the word store's data and seeds come from
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Seed phrase for shuffling the secrets (controls the daily word)
    #[arg(long, env = "DAILY_SEED", default_value = DEFAULT_DAILY_SEED, global = true)]
    pub daily_seed: String,

    /// Seed phrase for shuffling the valid words (controls shareable codes)
    #[arg(long, env = "VALID_WORDS_SEED", default_value = DEFAULT_VALID_WORDS_SEED, global = true)]
    pub valid_words_seed: String,

    /// File of secret words, one per line (default: embedded list)
    #[arg(long, value_name = "FILE", global = true)]
    pub secrets: Option<PathBuf>,

    /// File of extra guessable words, one per line (default: embedded list)
    #[arg(long, value_name = "FILE", global = true)]
    pub words: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            daily_seed: DEFAULT_DAILY_SEED.to_string(),
            valid_words_seed: DEFAULT_VALID_WORDS_SEED.to_string(),
            secrets: None,
            words: None,
        }
    }
}

impl StoreConfig {
    /// Load the sources and build the store
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a word file cannot be read or the data is
    /// empty or inconsistent.
    pub fn build_store(&self) -> Result<WordStore, ConfigError> {
        let secrets = match &self.secrets {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(SECRETS),
        };
        let words = match &self.words {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(WORDS),
        };
        info!(
            "loading {} secrets and {} extra words",
            secrets.len(),
            words.len()
        );

        WordStore::build(
            words,
            secrets,
            Seed::new(&self.valid_words_seed),
            Seed::new(&self.daily_seed),
        )
    }
}

/// How a `play` session picks its answer and rules
#[derive(Debug, Clone, Args)]
pub struct GameConfig {
    /// Reject guesses that reuse letters known to be absent
    #[arg(long)]
    pub hard: bool,

    /// Number of guesses allowed
    #[arg(short, long, default_value_t = DEFAULT_TRIES, value_parser = clap::value_parser!(u32).range(1..))]
    pub tries: u32,

    /// Play today's daily word
    #[arg(long, conflicts_with_all = ["date", "code"])]
    pub daily: bool,

    /// Play the daily word of a given date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "code")]
    pub date: Option<NaiveDate>,

    /// Play the word behind a shareable code
    #[arg(long)]
    pub code: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hard: false,
            tries: DEFAULT_TRIES,
            daily: false,
            date: None,
            code: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        GameOptions {
            hard_mode: self.hard,
            tries: self.tries,
        }
    }
}

/// Map `-v` repetitions to a level; `RUST_LOG` still overrides it
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
