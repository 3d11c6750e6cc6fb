//! Guess predicates
//!
//! Pure checks run against a normalized guess before it is scored.

use super::Word;
use crate::wordlists::WordStore;
use std::collections::BTreeSet;

/// Exact equality of two normalized words
#[inline]
#[must_use]
pub fn is_guess_correct(answer: &Word, guess: &Word) -> bool {
    answer == guess
}

/// Whether `guess` appears in the store's valid-word index
#[inline]
#[must_use]
pub fn is_guess_valid_word(store: &WordStore, guess: &Word) -> bool {
    store.is_valid_word(guess.text())
}

/// True if any letter of `guess` is known to be absent
#[must_use]
pub fn has_absent_letter(guess: &Word, absent_letters: &BTreeSet<char>) -> bool {
    first_absent_letter(guess, absent_letters).is_some()
}

/// Leftmost letter of `guess` that is known to be absent
#[must_use]
pub fn first_absent_letter(guess: &Word, absent_letters: &BTreeSet<char>) -> Option<char> {
    guess
        .chars()
        .iter()
        .map(|&c| char::from(c))
        .find(|c| absent_letters.contains(c))
}

/// True if every known present letter is reused somewhere in `guess`
///
/// Vacuously true when nothing is known yet.
#[must_use]
pub fn has_present_letters(guess: &Word, present_letters: &BTreeSet<char>) -> bool {
    present_letters.iter().all(|&c| guess.has_letter(c))
}

/// True if `guess` keeps every confirmed letter in its slot
///
/// `None` slots are unconstrained.
#[must_use]
pub fn has_correct_letters_in_position(guess: &Word, correct_letters: &[Option<char>]) -> bool {
    correct_letters
        .iter()
        .enumerate()
        .all(|(i, slot)| match slot {
            Some(letter) => guess.chars().get(i).map(|&c| char::from(c)) == Some(*letter),
            None => true,
        })
}
