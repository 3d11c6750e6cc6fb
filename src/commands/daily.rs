//! Daily puzzle lookup

use crate::wordlists::{WordStore, daily};
use chrono::NaiveDate;

/// Public facts about one day's puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyInfo {
    pub date: NaiveDate,
    pub day: i64,
    /// `None` when the day's secret sits at index 0
    pub code: Option<String>,
}

#[must_use]
pub fn daily_info(store: &WordStore, date: NaiveDate) -> DailyInfo {
    let secret = store.secret_for_date(date);
    DailyInfo {
        date,
        day: daily::day_number(date),
        code: store.encode_secret_as_code(secret.text()),
    }
}
