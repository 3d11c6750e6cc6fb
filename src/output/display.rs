//! Display functions for command results

use super::formatters::{colored_row, correct_pattern, hints_to_emoji, letter_list};
use crate::core::LetterHint;
use crate::game::{GameState, Summary};
use colored::Colorize;
use std::io::{self, Write};

/// Print one scored guess as tiles followed by its emoji row
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_hint_row(out: &mut impl Write, hints: &[LetterHint]) -> io::Result<()> {
    writeln!(out, "  {}  {}", colored_row(hints), hints_to_emoji(hints))
}

/// Print the end-of-game (or in-progress) summary
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_summary(out: &mut impl Write, summary: &Summary) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    match summary.state {
        GameState::Won => writeln!(out, "{}", "✅ Solved!".green().bold())?,
        GameState::Lost => writeln!(out, "{}", "❌ Out of tries".red().bold())?,
        GameState::Playing => writeln!(out, "{}", "… In progress".yellow())?,
    }
    if let Some(answer) = &summary.answer {
        writeln!(
            out,
            "   Answer:   {}",
            answer.text().to_uppercase().bright_yellow().bold()
        )?;
    }
    writeln!(out, "   Tries:    {} remaining", summary.tries_remaining)?;
    writeln!(
        out,
        "   Known:    {}",
        correct_pattern(&summary.correct_letters)
    )?;
    writeln!(
        out,
        "   Present:  {}",
        letter_list(&summary.present_letters)
    )?;
    writeln!(out, "   Absent:   {}", letter_list(&summary.absent_letters))?;

    if !summary.guesses.is_empty() {
        writeln!(out)?;
        for row in &summary.guesses {
            writeln!(out, "   {}", hints_to_emoji(row))?;
        }
    }
    writeln!(out, "{}", "─".repeat(40).cyan())
}

/// Print day number and code for a daily puzzle, never the answer
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_daily_info(
    out: &mut impl Write,
    date: chrono::NaiveDate,
    day: i64,
    code: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "Date:  {date}")?;
    writeln!(out, "Day:   #{day}")?;
    match code {
        Some(code) => writeln!(out, "Code:  {}", code.bright_cyan().bold()),
        None => writeln!(out, "Code:  (this secret has no shareable code)"),
    }
}
