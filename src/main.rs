//! Wordle Game - CLI
//!
//! Play in the terminal, look up daily puzzles and convert shareable codes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use wordle_game::{
    commands::{daily_info, decode_code, encode_secret, evaluate_pair, new_game, run_play},
    config::{GameConfig, StoreConfig, init_logging},
    output::{print_daily_info, print_hint_row, print_summary},
    wordlists::daily,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    store: StoreConfig,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        #[command(flatten)]
        game: GameConfig,

        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the day number and shareable code of a daily puzzle
    Daily {
        /// Date to look up (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Turn a secret word into a shareable code
    Encode {
        /// The secret word
        secret: String,
    },

    /// Reveal the secret behind a shareable code
    Decode {
        /// The shareable code
        code: String,
    },

    /// Score a guess against an answer
    Evaluate {
        /// The answer
        answer: String,
        /// The guess
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = cli
        .store
        .build_store()
        .context("failed to load word lists")?;

    let command = cli.command.unwrap_or(Commands::Play {
        game: GameConfig::default(),
        json: false,
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Play { game, json } => {
            let mut game = new_game(&store, &game)?;
            run_play(&mut game, io::stdin().lock(), &mut out)?;
            let summary = game.summary();
            if json {
                writeln!(out, "{}", summary.to_json()?)?;
            } else {
                print_summary(&mut out, &summary)?;
            }
        }
        Commands::Daily { date } => {
            let info = daily_info(&store, date.unwrap_or_else(daily::today));
            print_daily_info(&mut out, info.date, info.day, info.code.as_deref())?;
        }
        Commands::Encode { secret } => {
            writeln!(out, "{}", encode_secret(&store, &secret)?)?;
        }
        Commands::Decode { code } => {
            writeln!(out, "{}", decode_code(&store, &code)?)?;
        }
        Commands::Evaluate { answer, guess } => {
            print_hint_row(&mut out, &evaluate_pair(&answer, &guess)?)?;
        }
    }

    Ok(())
}
