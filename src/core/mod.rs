//! Core domain types for Wordle
//!
//! Words, per-letter hints and the pure evaluation functions. Nothing here
//! holds session state; `GameStatus` only folds in hints it is given.

pub mod evaluator;
mod hint;
mod status;
mod word;

pub use hint::{LetterHint, LetterState, evaluate_guess};
pub use status::GameStatus;
pub use word::{Word, WordError, normalize_guess};
