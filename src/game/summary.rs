//! Serializable game snapshot

use super::GameState;
use crate::core::{LetterHint, Word};
use serde::Serialize;

/// Snapshot of a game for display or export
///
/// `answer` is `None` while the game is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub state: GameState,
    pub tries_remaining: u32,
    pub guesses: Vec<Vec<LetterHint>>,
    pub absent_letters: Vec<char>,
    pub present_letters: Vec<char>,
    pub correct_letters: Vec<Option<char>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Word>,
}

impl Summary {
    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
