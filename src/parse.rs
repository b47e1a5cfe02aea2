//! Lenient string parsing into temporal records.
//!
//! Nothing here fails: a token that is not an integer becomes `None`, and a
//! string of no recognized shape yields an empty record. Deciding whether
//! the result is usable is left to [`crate::validate`].

use crate::consts::{
    COMPACT_DATE_LEN, COMPACT_TIME_LEN, DATE_SEPARATOR, DATETIME_SEPARATOR, SLASH_SEPARATOR,
    TIME_SEPARATOR,
};
use crate::text::is_integer;
use crate::types::{DateValue, TemporalValue, TimeValue};

/// Reads one component, `None` unless the token is an integer
fn component(token: Option<&str>) -> Option<i32> {
    let token = token?.trim();
    if !is_integer(token) {
        return None;
    }
    token.parse().ok()
}

/// Splits `s` on `separator` and reads the first three tokens in order
fn split_components(s: &str, separator: char) -> [Option<i32>; 3] {
    let mut parts = s.split(separator);
    [
        component(parts.next()),
        component(parts.next()),
        component(parts.next()),
    ]
}

/// Slices fixed-width fields out of `s`; `None` for fields that do not
/// land on character boundaries
fn fixed_width(s: &str, bounds: [(usize, usize); 3]) -> [Option<i32>; 3] {
    bounds.map(|(start, end)| component(s.get(start..end)))
}

/// Parses `yyyy-MM-dd`, `yyyy/MM/dd` or `yyyyMMdd`.
///
/// Hyphens win over slashes when both appear. Missing trailing components
/// (`"2024-03"`) are left `None`.
pub fn parse_date(s: &str) -> DateValue {
    let trimmed = s.trim();

    let [year, month, day] = if trimmed.contains(DATE_SEPARATOR) {
        split_components(trimmed, DATE_SEPARATOR)
    } else if trimmed.contains(SLASH_SEPARATOR) {
        split_components(trimmed, SLASH_SEPARATOR)
    } else if trimmed.chars().count() == COMPACT_DATE_LEN {
        fixed_width(trimmed, [(0, 4), (4, 6), (6, 8)])
    } else {
        return DateValue::default();
    };

    DateValue { year, month, day }
}

/// Parses `hh:mm:ss` (minute and second optional) or `hhmmss`.
pub fn parse_time(s: &str) -> TimeValue {
    let trimmed = s.trim();

    let [hour, minute, second] = if trimmed.contains(TIME_SEPARATOR) {
        split_components(trimmed, TIME_SEPARATOR)
    } else if trimmed.chars().count() == COMPACT_TIME_LEN {
        fixed_width(trimmed, [(0, 2), (2, 4), (4, 6)])
    } else {
        return TimeValue::default();
    };

    TimeValue {
        hour,
        minute,
        second,
    }
}

/// Parses a date optionally followed by a space and a time.
///
/// Only the first space splits; without one the time fields stay `None`.
pub fn parse_datetime(s: &str) -> TemporalValue {
    let trimmed = s.trim();
    match trimmed.split_once(DATETIME_SEPARATOR) {
        Some((date, time)) => TemporalValue::from_parts(parse_date(date), parse_time(time)),
        None => parse_date(trimmed).into(),
    }
}
