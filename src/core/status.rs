//! Knowledge accumulated across guesses

use super::{LetterHint, LetterState};
use std::collections::BTreeSet;

/// Letters learned so far in one game
///
/// Only ever grows: each accepted guess is folded in with [`GameStatus::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    absent: BTreeSet<char>,
    present: BTreeSet<char>,
    correct: Vec<Option<char>>,
}

impl GameStatus {
    /// Empty status for words of `word_len` letters
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        Self {
            absent: BTreeSet::new(),
            present: BTreeSet::new(),
            correct: vec![None; word_len],
        }
    }

    /// Fold one guess's hints into the status
    ///
    /// A letter marked absent only because its occurrences were used up
    /// elsewhere in the same guess is never recorded as absent.
    pub fn update(&mut self, hints: &[LetterHint]) {
        for (position, hint) in hints.iter().enumerate() {
            match hint.state {
                LetterState::Correct => {
                    if let Some(slot) = self.correct.get_mut(position) {
                        *slot = Some(hint.letter);
                    }
                    self.absent.remove(&hint.letter);
                    self.present.insert(hint.letter);
                }
                LetterState::Present => {
                    self.absent.remove(&hint.letter);
                    self.present.insert(hint.letter);
                }
                LetterState::Absent => {
                    if !self.is_known_in_answer(hint.letter) {
                        self.absent.insert(hint.letter);
                    }
                }
            }
        }
    }

    fn is_known_in_answer(&self, letter: char) -> bool {
        self.present.contains(&letter) || self.correct.contains(&Some(letter))
    }

    #[must_use]
    pub const fn absent_letters(&self) -> &BTreeSet<char> {
        &self.absent
    }

    #[must_use]
    pub const fn present_letters(&self) -> &BTreeSet<char> {
        &self.present
    }

    #[must_use]
    pub fn correct_letters(&self) -> &[Option<char>] {
        &self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate_guess};

    fn fold(answer: &str, guesses: &[&str]) -> GameStatus {
        let answer = Word::new(answer).unwrap();
        let mut status = GameStatus::new(answer.len());
        for guess in guesses {
            status.update(&evaluate_guess(&answer, &Word::new(*guess).unwrap()));
        }
        status
    }

    fn set(chars: &str) -> BTreeSet<char> {
        chars.chars().collect()
    }

    #[test]
    fn new_status_is_empty() {
        let status = GameStatus::new(5);
        assert!(status.absent_letters().is_empty());
        assert!(status.present_letters().is_empty());
        assert_eq!(status.correct_letters(), &[None::<char>; 5]);
    }

    #[test]
    fn records_each_state() {
        let status = fold("crepe", &["speed"]);
        assert_eq!(status.absent_letters(), &set("sd"));
        assert_eq!(status.present_letters(), &set("pe"));
        assert_eq!(
            status.correct_letters(),
            &[None, None, Some('e'), None, None]
        );
    }

    #[test]
    fn exhausted_duplicate_is_not_absent() {
        // second e is absent only because abide has a single e
        let status = fold("abide", &["speed"]);
        assert!(!status.absent_letters().contains(&'e'));
        assert!(status.present_letters().contains(&'e'));
    }

    #[test]
    fn absent_before_correct_in_same_guess() {
        // leading e is absent, the later two are correct
        let status = fold("speed", &["emeer"]);
        assert!(!status.absent_letters().contains(&'e'));
        assert_eq!(status.absent_letters(), &set("mr"));
        assert_eq!(
            status.correct_letters(),
            &[None, None, Some('e'), Some('e'), None]
        );
    }

    #[test]
    fn never_shrinks() {
        let status = fold("crane", &["slate", "wrong", "crepe"]);
        assert!(status.absent_letters().is_superset(&set("sltwog")));
        assert!(status.present_letters().is_superset(&set("aenrc")));
        assert_eq!(status.correct_letters()[0], Some('c'));
        assert_eq!(status.correct_letters()[4], Some('e'));
    }
}
