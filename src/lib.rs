//! Wordle Game
//!
//! The core of a Wordle-style game: duplicate-aware guess scoring, a
//! seeded daily secret, and shareable codes that hide the answer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::game::{Game, GameOptions};
//! use wordle_game::wordlists::{Seed, WordStore};
//!
//! let store = WordStore::from_embedded(Seed::new("valid"), Seed::new("daily")).unwrap();
//! let mut game = Game::random(&store, &mut rand::rng(), GameOptions::default());
//!
//! match game.try_guess("crane") {
//!     Ok(state) => println!("{state:?}: {:?}", game.guesses().last()),
//!     Err(e) => println!("rejected: {e}"),
//! }
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists and the word store
pub mod wordlists;

// Error taxonomy
pub mod error;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
