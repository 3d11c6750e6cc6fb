//! Shuffled word lists with index lookup
//!
//! The store keeps two independently shuffled lists: every guessable word,
//! and the secrets. Shareable codes rely on the two lists sharing an index
//! space: a secret at index `i` is disguised as the valid word at index `i`,
//! and that word is what gets base-32 encoded. This hides the answer from a
//! casual reader; it is not encryption.
//!
//! Index 0 is never encodable or decodable. Index lookups treat position 0
//! like a missing entry, so the secret and the valid word that sit at the
//! front of their lists never round-trip through a code.

use super::{SECRETS, Seed, WORDS, codec, daily, shuffle};
use crate::core::{Word, normalize_guess};
use crate::error::ConfigError;
use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rustc_hash::FxHashMap;

/// Which of the two shuffled lists to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordList {
    Valid,
    Secrets,
}

/// Immutable word data shared by every game
#[derive(Debug, Clone)]
pub struct WordStore {
    word_len: usize,
    valid_words: Vec<Word>,
    valid_index: FxHashMap<String, usize>,
    secrets: Vec<Word>,
    secret_index: FxHashMap<String, usize>,
}

impl WordStore {
    /// Shuffle the source lists into a new store
    ///
    /// The valid list is `valid_source` followed by `secrets_source`, shuffled
    /// with `valid_seed`. A word present in both sources therefore appears
    /// twice; its index entry points at the later occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either source is empty or the words do not
    /// all share the length of the first secret.
    pub fn build(
        valid_source: Vec<Word>,
        secrets_source: Vec<Word>,
        valid_seed: Seed,
        secret_seed: Seed,
    ) -> Result<Self, ConfigError> {
        let word_len = secrets_source
            .first()
            .ok_or(ConfigError::EmptySource("secret"))?
            .len();
        if valid_source.is_empty() {
            return Err(ConfigError::EmptySource("valid"));
        }

        if let Some(word) = secrets_source
            .iter()
            .chain(&valid_source)
            .find(|w| w.len() != word_len)
        {
            return Err(ConfigError::InconsistentLength {
                word: word.text().to_string(),
                expected: word_len,
                actual: word.len(),
            });
        }

        let secrets = shuffle(secrets_source.clone(), secret_seed);
        let mut combined = valid_source;
        combined.extend(secrets_source);
        let valid_words = shuffle(combined, valid_seed);

        debug!(
            "built word store: {} valid words, {} secrets, {word_len} letters",
            valid_words.len(),
            secrets.len()
        );

        Ok(Self {
            word_len,
            valid_index: index_map(&valid_words),
            valid_words,
            secret_index: index_map(&secrets),
            secrets,
        })
    }

    /// Build from the word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded data is malformed.
    pub fn from_embedded(valid_seed: Seed, secret_seed: Seed) -> Result<Self, ConfigError> {
        Self::build(
            super::loader::words_from_slice(WORDS),
            super::loader::words_from_slice(SECRETS),
            valid_seed,
            secret_seed,
        )
    }

    /// Letters per word
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub fn valid_words(&self) -> &[Word] {
        &self.valid_words
    }

    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    /// Position of `word` in one of the shuffled lists
    #[must_use]
    pub fn index_of(&self, list: WordList, word: &str) -> Option<usize> {
        let index = match list {
            WordList::Valid => &self.valid_index,
            WordList::Secrets => &self.secret_index,
        };
        index.get(word).copied()
    }

    /// Whether the normalized form of `word` is guessable
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.valid_index
            .contains_key(&normalize_guess(word, self.word_len))
    }

    /// Secret for a day number, wrapping in both directions
    #[must_use]
    pub fn secret_for_day_number(&self, day: i64) -> &Word {
        let len = self.secrets.len() as i64;
        // rem_euclid is never negative and always below len
        let index = day.rem_euclid(len) as usize;
        &self.secrets[index]
    }

    /// Secret for a calendar date
    #[must_use]
    pub fn secret_for_date(&self, date: NaiveDate) -> &Word {
        self.secret_for_day_number(daily::day_number(date))
    }

    /// Secret for the local calendar date
    #[must_use]
    pub fn todays_secret(&self) -> &Word {
        self.secret_for_date(daily::today())
    }

    /// Uniformly random secret
    pub fn random_secret<R: Rng>(&self, rng: &mut R) -> &Word {
        self.random_secret_with(|n| rng.random_range(0..n))
    }

    /// Secret at the index chosen by `pick`, which receives the list length
    pub fn random_secret_with(&self, pick: impl FnOnce(usize) -> usize) -> &Word {
        let len = self.secrets.len();
        &self.secrets[pick(len) % len]
    }

    /// Shareable code for `secret`
    ///
    /// Returns `None` if `secret` is not a secret, or is the secret at index 0.
    #[must_use]
    pub fn encode_secret_as_code(&self, secret: &str) -> Option<String> {
        let index = nonzero_index(self.index_of(WordList::Secrets, secret))?;
        let disguise = self.valid_words.get(index)?;
        Some(codec::encode(disguise.text()))
    }

    /// Secret hidden behind `code`
    ///
    /// Returns `None` if the code does not decode to a valid word, that word
    /// sits at index 0, or its index lies past the end of the secrets.
    #[must_use]
    pub fn decode_code_as_secret(&self, code: &str) -> Option<&Word> {
        let disguise = codec::decode(code)?;
        let index = nonzero_index(self.index_of(WordList::Valid, &disguise))?;
        self.secrets.get(index)
    }
}

/// Index 0 counts as not found
fn nonzero_index(index: Option<usize>) -> Option<usize> {
    index.filter(|&i| i != 0)
}

fn index_map(words: &[Word]) -> FxHashMap<String, usize> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| (word.text().to_string(), i))
        .collect()
}
