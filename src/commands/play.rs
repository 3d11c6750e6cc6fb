//! Interactive play on a line-based terminal

use crate::config::GameConfig;
use crate::game::{Game, GameState};
use crate::output::print_hint_row;
use crate::wordlists::{WordStore, daily};
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Start the game described by `config`
///
/// A code wins over a date, a date over `--daily`; with none of them the
/// answer is drawn at random.
///
/// # Errors
///
/// Returns an error if a code was given that maps to no secret.
pub fn new_game<'a>(store: &'a WordStore, config: &GameConfig) -> Result<Game<'a>> {
    let options = config.options();
    if let Some(code) = &config.code {
        return Game::from_code(store, code, options)
            .ok_or_else(|| anyhow!("'{}' is not a valid code", code.trim()));
    }
    if let Some(date) = config.date {
        return Ok(Game::daily(store, date, options));
    }
    if config.daily {
        return Ok(Game::daily(store, daily::today(), options));
    }
    Ok(Game::random(store, &mut rand::rng(), options))
}

/// Read guesses from `input` until the game ends, input runs out or the
/// player types `quit`
///
/// Rejected guesses are reported and cost nothing.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_play(game: &mut Game<'_>, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Guess the {}-letter word. {} tries{}.",
        game.word_len(),
        game.tries_remaining(),
        if game.hard_mode() { ", hard mode" } else { "" }
    )?;
    if let Some(code) = game.code() {
        writeln!(out, "Share code: {}", code.bright_cyan())?;
    }

    let mut lines = input.lines();
    while !game.is_over() {
        write!(out, "Guess ({} left): ", game.tries_remaining())?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                writeln!(out, "✗ input is not valid UTF-8")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let trimmed = line.trim();
        if matches!(trimmed, "quit" | "q" | "exit") {
            break;
        }

        let rows_before = game.guesses().len();
        match game.try_guess(trimmed) {
            Ok(state) => {
                if let Some(row) = game.guesses().get(rows_before) {
                    print_hint_row(out, row)?;
                }
                if state == GameState::Won {
                    writeln!(out, "{}", "🎉 You got it!".green().bold())?;
                }
            }
            Err(e) => writeln!(out, "✗ {e}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{DEFAULT_TRIES, GameOptions};
    use crate::wordlists::Seed;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn store() -> WordStore {
        WordStore::build(
            words_from_slice(&["tests", "wrong", "error"]),
            words_from_slice(&["speed", "crepe", "abide"]),
            Seed::new("valid"),
            Seed::new("daily"),
        )
        .unwrap()
    }

    fn play(game: &mut Game<'_>, input: &str) -> String {
        let mut out = Vec::new();
        run_play(game, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plays_to_a_win() {
        let store = store();
        let mut game = Game::new(&store, Word::new("speed").unwrap(), GameOptions::default());

        let output = play(&mut game, "crepe\nzzzzz\nspeed\nwrong\n");
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.guesses().len(), 1);
        assert!(output.contains("'zzzzz' is not in the word list"));
        assert!(output.contains("You got it!"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let store = store();
        let mut game = Game::new(&store, Word::new("speed").unwrap(), GameOptions::default());

        let output = play(&mut game, "tests\nabc\n");
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.guesses().len(), 1);
        assert!(output.contains("guess must be 5 letters long, got 3"));
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_skipped() {
        let store = store();
        let mut game = Game::new(&store, Word::new("speed").unwrap(), GameOptions::default());

        let mut out = Vec::new();
        let input = Cursor::new(b"\xff\xfe\nspeed\n".to_vec());
        run_play(&mut game, input, &mut out).unwrap();

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.tries_remaining(), DEFAULT_TRIES);
        assert!(String::from_utf8(out).unwrap().contains("not valid UTF-8"));
    }

    #[test]
    fn quit_leaves_game_in_progress() {
        let store = store();
        let mut game = Game::new(&store, Word::new("speed").unwrap(), GameOptions::default());
        play(&mut game, "quit\nspeed\n");
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn new_game_from_date_and_code() {
        let store = store();
        let date = chrono::NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        let config = GameConfig {
            date: Some(date),
            ..GameConfig::default()
        };
        let mut game = new_game(&store, &config).unwrap();
        game.try_guess(store.secret_for_date(date).text()).unwrap();
        assert_eq!(game.state(), GameState::Won);

        let code = store
            .encode_secret_as_code(store.secrets()[1].text())
            .unwrap();
        let config = GameConfig {
            code: Some(code),
            ..GameConfig::default()
        };
        let mut game = new_game(&store, &config).unwrap();
        game.try_guess(store.secrets()[1].text()).unwrap();
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn new_game_rejects_bad_code() {
        let store = store();
        let config = GameConfig {
            code: Some("nope".to_string()),
            ..GameConfig::default()
        };
        assert!(new_game(&store, &config).is_err());
    }
}
