//! Command implementations

pub mod code;
pub mod daily;
pub mod evaluate;
pub mod play;

pub use code::{decode_code, encode_secret};
pub use daily::{DailyInfo, daily_info};
pub use evaluate::evaluate_pair;
pub use play::{new_game, run_play};
