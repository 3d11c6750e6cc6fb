//! Wordle word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Its length is not
//! fixed here; the `WordStore` enforces that every word it holds shares one.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A lowercase Wordle word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased; no other normalization happens.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.text.contains(letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for hint calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Normalize raw input into a guess of at most `len` letters
///
/// Lowercases, drops every character that is not an unaccented `a`-`z`
/// letter, then keeps the first `len` that remain. Dropped characters are
/// removed, not replaced, so the result can be shorter than `len`.
///
/// # Examples
/// ```
/// use wordle_game::core::normalize_guess;
///
/// assert_eq!(normalize_guess("TeStS", 5), "tests");
/// assert_eq!(normalize_guess("té5t*", 5), "tt");
/// assert_eq!(normalize_guess("testsssssss", 5), "tests");
/// ```
#[must_use]
pub fn normalize_guess(raw: &str, len: usize) -> String {
    raw.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .take(len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_length_is_not_fixed() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("lantern").unwrap().len(), 7);
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter('c'));
        assert!(word.has_letter('e'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'p'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'd'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'a'), Some(&5));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize_guess("TeStS", 5), "tests");
    }

    #[test]
    fn normalize_strips_non_letters() {
        assert_eq!(normalize_guess("té5t*", 5), "tt");
        assert_eq!(normalize_guess(" s-p e.e_d ", 5), "speed");
        assert_eq!(normalize_guess("12345", 5), "");
    }

    #[test]
    fn normalize_truncates() {
        assert_eq!(normalize_guess("testsssssss", 5), "tests");
        assert_eq!(normalize_guess("testsssssss", 3), "tes");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["TeStS", "té5t*", "testsssssss", "", "ÀBÇDÉ", "a b c"] {
            let once = normalize_guess(raw, 5);
            assert_eq!(normalize_guess(&once, 5), once, "input {raw:?}");
        }
    }
}
