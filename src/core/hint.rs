//! Per-letter feedback for a guess
//!
//! Each guessed letter gets one of three states:
//! - Correct (right letter, right position)
//! - Present (letter is in the answer, elsewhere)
//! - Absent (no unclaimed occurrence left in the answer)

use super::Word;
use serde::Serialize;

/// Feedback state of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

/// One guessed letter paired with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LetterHint {
    pub letter: char,
    pub state: LetterState,
}

impl LetterHint {
    #[must_use]
    pub const fn new(letter: char, state: LetterState) -> Self {
        Self { letter, state }
    }

    #[must_use]
    pub const fn correct(letter: char) -> Self {
        Self::new(letter, LetterState::Correct)
    }

    #[must_use]
    pub const fn present(letter: char) -> Self {
        Self::new(letter, LetterState::Present)
    }

    #[must_use]
    pub const fn absent(letter: char) -> Self {
        Self::new(letter, LetterState::Absent)
    }

    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self.state, LetterState::Correct)
    }
}

/// Score `guess` against `answer`, one hint per guessed letter
///
/// Duplicate letters are credited only up to the number of times they occur
/// in the answer.
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass, left to right: mark present letters while the pool still
///    holds that letter; everything else is absent
///
/// Both words are expected to have the same length; extra letters of a
/// longer guess are ignored.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterHint, Word, evaluate_guess};
///
/// let answer = Word::new("abide").unwrap();
/// let guess = Word::new("speed").unwrap();
///
/// assert_eq!(
///     evaluate_guess(&answer, &guess),
///     vec![
///         LetterHint::absent('s'),
///         LetterHint::absent('p'),
///         LetterHint::present('e'),
///         LetterHint::absent('e'),
///         LetterHint::present('d'),
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate_guess(answer: &Word, guess: &Word) -> Vec<LetterHint> {
    debug_assert_eq!(answer.len(), guess.len(), "words must share a length");

    let mut result: Vec<Option<LetterState>> = vec![None; guess.len().min(answer.len())];
    let mut answer_available = answer.char_counts();

    // First pass: exact position matches
    for (slot, (&g, &a)) in result
        .iter_mut()
        .zip(guess.chars().iter().zip(answer.chars()))
    {
        if g == a {
            *slot = Some(LetterState::Correct);
            if let Some(count) = answer_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an occurrence is still unclaimed
    for (slot, &g) in result.iter_mut().zip(guess.chars()) {
        if slot.is_none() {
            *slot = Some(match answer_available.get_mut(&g) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterState::Present
                }
                _ => LetterState::Absent,
            });
        }
    }

    result
        .into_iter()
        .zip(guess.chars())
        .map(|(state, &g)| LetterHint::new(char::from(g), state.unwrap_or(LetterState::Absent)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn hints(answer: &str, guess: &str) -> Vec<LetterHint> {
        evaluate_guess(&Word::new(answer).unwrap(), &Word::new(guess).unwrap())
    }

    /// Compact form: C = correct, P = present, A = absent
    fn states(answer: &str, guess: &str) -> String {
        hints(answer, guess)
            .iter()
            .map(|h| match h.state {
                LetterState::Correct => 'C',
                LetterState::Present => 'P',
                LetterState::Absent => 'A',
            })
            .collect()
    }

    #[test_case("tests", "tests", "CCCCC" ; "exact match")]
    #[test_case("tests", "wrong", "AAAAA" ; "nothing in common")]
    #[test_case("tests", "error", "PAAAA" ; "single present letter")]
    #[test_case("abide", "speed", "AAPAP" ; "repeated guess letter only present once")]
    #[test_case("steal", "speed", "CACAA" ; "repeated guess letter correct once")]
    #[test_case("erase", "speed", "PAPPA" ; "two repeated letters present")]
    #[test_case("crepe", "speed", "APCPA" ; "repeated letter correct and present")]
    #[test_case("speed", "emeer", "AACCA" ; "present letter before the correct ones")]
    #[test_case("floor", "robot", "PPACA" ; "correct takes priority over earlier present")]
    fn evaluate_cases(answer: &str, guess: &str, expected: &str) {
        assert_eq!(states(answer, guess), expected);
    }

    #[test]
    fn hints_carry_guess_letters() {
        let letters: String = hints("tests", "error").iter().map(|h| h.letter).collect();
        assert_eq!(letters, "error");
        assert_eq!(
            hints("tests", "error"),
            vec![
                LetterHint::present('e'),
                LetterHint::absent('r'),
                LetterHint::absent('r'),
                LetterHint::absent('o'),
                LetterHint::absent('r'),
            ]
        );
    }

    #[test]
    fn same_word_is_all_correct() {
        for word in ["crane", "slate", "speed", "zzzzz", "aaaaa"] {
            assert!(hints(word, word).iter().all(|h| h.is_correct()), "{word}");
        }
    }

    #[test]
    fn credit_never_exceeds_answer_occurrences() {
        let pairs = [
            ("abide", "speed"),
            ("speed", "eeeee"),
            ("erase", "eerie"),
            ("crepe", "peppy"),
            ("tests", "sssst"),
            ("floor", "ooooo"),
        ];
        for (answer, guess) in pairs {
            let result = hints(answer, guess);
            for letter in guess.chars() {
                let credited = result
                    .iter()
                    .filter(|h| h.letter == letter && h.state != LetterState::Absent)
                    .count();
                let occurs = answer.chars().filter(|&c| c == letter).count();
                assert!(credited <= occurs, "{answer}/{guess}: {letter}");
            }
        }
    }

    #[test]
    fn other_word_lengths() {
        assert_eq!(states("cat", "act"), "PPC");
        assert_eq!(states("banana", "ananas"), "PPPPPA");
    }
}
