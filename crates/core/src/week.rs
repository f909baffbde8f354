//! Calendar arithmetic for the weekly board.
//!
//! Weeks run Monday through Sunday (ISO 8601). The board for a given date
//! always starts on the Monday of that date's week, so "this week" is
//! stable no matter which weekday the request lands on.

use chrono::{Datelike, Duration, NaiveDate};

/// Largest accepted week offset from the current week, in either
/// direction (10 years). Keeps offset arithmetic far away from the
/// representable date range.
pub const MAX_WEEK_OFFSET: i64 = 520;

/// Monday of the week containing `date`. A Monday maps to itself.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The seven consecutive days starting at `start`.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Last day of the week starting at `start` (the following Sunday).
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(6)
}

/// Full English name of the date's weekday.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}
