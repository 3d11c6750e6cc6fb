//! Game state machine
//!
//! `Playing` moves to `Won` or `Lost` and never leaves either. Every check on
//! a guess runs before anything is mutated, so a rejected guess leaves the
//! game exactly as it was.

use super::Summary;
use crate::core::{GameStatus, LetterHint, Word, evaluate_guess, evaluator, normalize_guess};
use crate::error::GuessError;
use crate::wordlists::WordStore;
use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use serde::Serialize;

/// Guesses allowed when none are configured
pub const DEFAULT_TRIES: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Reject guesses that reuse letters already known to be absent
    pub hard_mode: bool,
    /// Incorrect guesses allowed; values below 1 are raised to 1
    pub tries: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hard_mode: false,
            tries: DEFAULT_TRIES,
        }
    }
}

/// One playthrough against a fixed answer
#[derive(Debug, Clone)]
pub struct Game<'a> {
    store: &'a WordStore,
    answer: Word,
    hard_mode: bool,
    tries_remaining: u32,
    state: GameState,
    status: GameStatus,
    guesses: Vec<Vec<LetterHint>>,
}

impl<'a> Game<'a> {
    /// Start a game against `answer`
    ///
    /// `answer` should come from `store`; a word of another length can never
    /// be guessed.
    #[must_use]
    pub fn new(store: &'a WordStore, answer: Word, options: GameOptions) -> Self {
        debug_assert_eq!(
            answer.len(),
            store.word_len(),
            "answer length differs from the store's word length"
        );
        debug!(
            "new game: hard_mode={}, tries={}",
            options.hard_mode, options.tries
        );
        Self {
            store,
            status: GameStatus::new(answer.len()),
            answer,
            hard_mode: options.hard_mode,
            tries_remaining: options.tries.max(1),
            state: GameState::Playing,
            guesses: Vec::new(),
        }
    }

    /// Start a game against a random secret
    pub fn random<R: Rng>(store: &'a WordStore, rng: &mut R, options: GameOptions) -> Self {
        let answer = store.random_secret(rng).clone();
        Self::new(store, answer, options)
    }

    /// Start a game against the daily secret for `date`
    #[must_use]
    pub fn daily(store: &'a WordStore, date: NaiveDate, options: GameOptions) -> Self {
        let answer = store.secret_for_date(date).clone();
        Self::new(store, answer, options)
    }

    /// Start a game against the secret behind a shareable code
    ///
    /// Returns `None` if the code does not map to a secret.
    #[must_use]
    pub fn from_code(store: &'a WordStore, code: &str, options: GameOptions) -> Option<Self> {
        let answer = store.decode_code_as_secret(code)?.clone();
        Some(Self::new(store, answer, options))
    }

    /// Submit a raw guess
    ///
    /// The input is normalized first. Returns the state after the guess.
    ///
    /// An exact match wins immediately and, unlike every other accepted
    /// guess, adds no hint row and leaves the status untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidState` once the game is won or lost
    /// - `InvalidLength` if the normalized guess has the wrong length
    /// - `HardModeViolation` in hard mode, if the guess uses a known-absent letter
    /// - `UnknownWord` if the guess is not in the valid word list
    pub fn try_guess(&mut self, raw: &str) -> Result<GameState, GuessError> {
        let guess = self.validate(raw)?;

        if evaluator::is_guess_correct(&self.answer, &guess) {
            self.state = GameState::Won;
            debug!("'{guess}' matches the answer");
            return Ok(self.state);
        }

        let hints = evaluate_guess(&self.answer, &guess);
        self.status.update(&hints);
        let solved = hints.iter().all(|h| h.is_correct());
        self.guesses.push(hints);

        if solved {
            self.state = GameState::Won;
        } else {
            self.tries_remaining -= 1;
            if self.tries_remaining == 0 {
                self.state = GameState::Lost;
            }
        }

        debug!(
            "accepted '{guess}': state={:?}, tries_remaining={}",
            self.state, self.tries_remaining
        );
        Ok(self.state)
    }

    fn validate(&self, raw: &str) -> Result<Word, GuessError> {
        if self.state != GameState::Playing {
            return Err(GuessError::InvalidState);
        }

        let expected = self.store.word_len();
        let normalized = normalize_guess(raw, expected);
        let actual = normalized.len();
        let guess = match Word::new(normalized) {
            Ok(word) if actual == expected => word,
            _ => return Err(GuessError::InvalidLength { expected, actual }),
        };

        if self.hard_mode
            && let Some(letter) =
                evaluator::first_absent_letter(&guess, self.status.absent_letters())
        {
            return Err(GuessError::HardModeViolation(letter));
        }

        if !evaluator::is_guess_valid_word(self.store, &guess) {
            return Err(GuessError::UnknownWord(guess.text().to_string()));
        }

        Ok(guess)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    #[must_use]
    pub const fn tries_remaining(&self) -> u32 {
        self.tries_remaining
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.store.word_len()
    }

    /// Hint rows of scored guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Vec<LetterHint>] {
        &self.guesses
    }

    #[must_use]
    pub const fn status(&self) -> &GameStatus {
        &self.status
    }

    /// The answer, once the game is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.is_over().then_some(&self.answer)
    }

    /// Shareable code for this game's answer
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.store.encode_secret_as_code(self.answer.text())
    }

    /// Snapshot of the game; the answer is included only once it is over
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            state: self.state,
            tries_remaining: self.tries_remaining,
            guesses: self.guesses.clone(),
            absent_letters: self.status.absent_letters().iter().copied().collect(),
            present_letters: self.status.present_letters().iter().copied().collect(),
            correct_letters: self.status.correct_letters().to_vec(),
            answer: self.revealed_answer().cloned(),
        }
    }
}
