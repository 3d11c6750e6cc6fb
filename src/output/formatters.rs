//! Formatting utilities for terminal output

use crate::core::{LetterHint, LetterState};
use colored::{ColoredString, Colorize};

/// Format a hint row as emoji string
#[must_use]
pub fn hints_to_emoji(hints: &[LetterHint]) -> String {
    hints
        .iter()
        .map(|hint| match hint.state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            LetterState::Absent => '⬜',
        })
        .collect()
}

/// Uppercase letter on a background matching its state
#[must_use]
pub fn colored_letter(hint: LetterHint) -> ColoredString {
    let tile = format!(" {} ", hint.letter.to_ascii_uppercase());
    match hint.state {
        LetterState::Correct => tile.black().on_green().bold(),
        LetterState::Present => tile.black().on_yellow().bold(),
        LetterState::Absent => tile.white().on_bright_black(),
    }
}

/// Hint row as coloured tiles
#[must_use]
pub fn colored_row(hints: &[LetterHint]) -> String {
    hints
        .iter()
        .map(|&hint| colored_letter(hint).to_string())
        .collect()
}

/// Known letters by position, `_` for unknown slots
#[must_use]
pub fn correct_pattern(correct_letters: &[Option<char>]) -> String {
    correct_letters
        .iter()
        .map(|slot| slot.map_or('_', |c| c.to_ascii_uppercase()))
        .collect()
}

/// Letters joined for display, uppercase
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
