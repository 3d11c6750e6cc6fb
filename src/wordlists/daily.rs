//! Calendar date to day number

use chrono::{Datelike, Local, NaiveDate};

/// `num_days_from_ce` of 2021-06-19, which is day 0
const EPOCH_DAYS_FROM_CE: i64 = 737_960;

/// Days since 2021-06-19; earlier dates are negative
#[must_use]
pub fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// Today's date on the local calendar
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
