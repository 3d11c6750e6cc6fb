//! Word lists and the word store
//!
//! Embedded static data, file loading, and the seeded shuffle, text codec
//! and day-number helpers the store is built on.

pub mod codec;
pub mod daily;
mod embedded;
pub mod loader;
mod shuffle;
mod store;

pub use embedded::{SECRETS, SECRETS_COUNT, WORDS, WORDS_COUNT};
pub use shuffle::{Seed, shuffle};
pub use store::{WordList, WordStore};
