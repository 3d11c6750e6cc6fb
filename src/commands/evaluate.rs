//! One-off scoring of a guess against an answer

use crate::core::{LetterHint, Word, evaluate_guess};
use anyhow::{Context, Result, bail};

/// Score `guess` against `answer` without a game or word list
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn evaluate_pair(answer: &str, guess: &str) -> Result<Vec<LetterHint>> {
    let answer = Word::new(answer.trim()).context("invalid answer")?;
    let guess = Word::new(guess.trim()).context("invalid guess")?;
    if answer.len() != guess.len() {
        bail!(
            "answer has {} letters but guess has {}",
            answer.len(),
            guess.len()
        );
    }
    Ok(evaluate_guess(&answer, &guess))
}
