//! A single playthrough
//!
//! `Game` is the only stateful piece: it borrows a shared `WordStore`,
//! scores guesses with the core evaluator and tracks playing/won/lost.

mod session;
mod summary;

pub use session::{DEFAULT_TRIES, Game, GameOptions, GameState};
pub use summary::Summary;
