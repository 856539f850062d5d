//! Date rendering for report headings.
//!
//! Dates are written as `DD <month> YYYY г.` with the month in the Russian
//! genitive case, optionally followed by `, HH-MM`. Values are rendered as
//! stored; no timezone conversion takes place.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Genitive month names, January first.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Returns the genitive month name for a 1-based month number.
pub fn month_genitive(month: u32) -> &'static str {
    // out-of-range input clamps to the nearest month
    MONTHS_GENITIVE[(month.clamp(1, 12) - 1) as usize]
}

/// Formats a calendar date, e.g. `10 мая 2024 г.`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {} г.",
        date.day(),
        month_genitive(date.month()),
        date.year()
    )
}

/// Formats a date and time.
///
/// With `include_time` the wall-clock time is appended as `, HH-MM`,
/// e.g. `10 мая 2024 г., 09-30`.
pub fn format_datetime(dt: NaiveDateTime, include_time: bool) -> String {
    let date = format_date(dt.date());
    if include_time {
        format!("{}, {:02}-{:02}", date, dt.hour(), dt.minute())
    } else {
        date
    }
}
