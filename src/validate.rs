//! Structural validity of dates and times.
//!
//! Dates are checked by one of two strategies chosen by the magnitude of the
//! `yyyyMMdd` key. Below [`PATTERN_VALIDATION_FLOOR`] the components are fed
//! through calendar construction and must come back unchanged; from year
//! 1600 on a single expression encoding the Gregorian leap rule decides.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use crate::arith::build_date;
use crate::consts::{
    DEFAULT_DAY, DEFAULT_MONTH, MAX_HOUR, MAX_MINUTE, MAX_SECOND, PATTERN_VALIDATION_FLOOR,
};
use crate::types::{DateValue, Temporal, TimeValue};

/// `dd-MM-yyyy` with an optional ` HH:mm:ss`, years 1600-9999.
static GREGORIAN_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        // 1-28 in every month, 29-30 outside February, 31 in long months
        r"(?:(?:0[1-9]|1\d|2[0-8])-(?:0[1-9]|1[0-2])",
        r"|(?:29|30)-(?:0[13-9]|1[0-2])",
        r"|31-(?:0[13578]|1[02]))",
        r"-(?:1[6-9]|[2-9]\d)\d{2}",
        // February 29th: divisible by 4 outside centuries, centuries divisible by 400
        r"|29-02-(?:(?:1[6-9]|[2-9]\d)(?:0[48]|[2468][048]|[13579][26])",
        r"|(?:16|[2468][048]|[3579][26])00)",
        r")",
        r"(?: (?:[01]\d|2[0-3]):[0-5]\d:[0-5]\d)?$",
    ))
    .expect("valid regex")
});

/// Whether the date components describe a real Gregorian date.
///
/// Month and day default to 1; a missing year is never valid.
pub fn is_date<T: Temporal + ?Sized>(value: &T) -> bool {
    date_is_valid(&value.date_part())
}

/// Whether hour, minute and second are all present and in range.
///
/// Zero is a valid value for every component.
pub fn is_time<T: Temporal + ?Sized>(value: &T) -> bool {
    time_is_valid(&value.time_part())
}

/// Whether both the date and the time components are valid.
pub fn is_datetime<T: Temporal + ?Sized>(value: &T) -> bool {
    is_date(value) && is_time(value)
}

pub(crate) fn date_is_valid(date: &DateValue) -> bool {
    let Some(year) = date.year else {
        return false;
    };
    let month = date.month.unwrap_or(DEFAULT_MONTH);
    let day = date.day.unwrap_or(DEFAULT_DAY);

    let yyyy = year.to_string();
    let mm = format!("{month:02}");
    let dd = format!("{day:02}");

    // Negative month or day leaves a sign inside the key
    let Ok(key) = format!("{yyyy}{mm}{dd}").parse::<i64>() else {
        return false;
    };

    if key < PATTERN_VALIDATION_FLOOR {
        tracing::trace!(key, "validating date by rollover");
        valid_by_rollover(year, month, day)
    } else {
        tracing::trace!(key, "validating date by pattern");
        valid_by_pattern(&format!("{dd}-{mm}-{yyyy}"))
    }
}

pub(crate) const fn time_is_valid(time: &TimeValue) -> bool {
    match (time.hour, time.minute, time.second) {
        (Some(hour), Some(minute), Some(second)) => {
            0 <= hour
                && hour <= MAX_HOUR
                && 0 <= minute
                && minute <= MAX_MINUTE
                && 0 <= second
                && second <= MAX_SECOND
        }
        _ => false,
    }
}

/// Calendar construction normalizes overflowing components, so a date
/// survives unchanged only if it was real to begin with.
pub(crate) fn valid_by_rollover(year: i32, month: i32, day: i32) -> bool {
    build_date(year, month, day).is_some_and(|built| {
        built.year() == year
            && i64::from(built.month()) == i64::from(month)
            && i64::from(built.day()) == i64::from(day)
    })
}

pub(crate) fn valid_by_pattern(text: &str) -> bool {
    GREGORIAN_DATE.is_match(text)
}
