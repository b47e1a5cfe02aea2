//! Rendering of temporal values through a fixed table of literal patterns.
//!
//! A pattern is looked up by its exact text. There is no tokenizer: a
//! pattern that is not in the table is rejected even if it is made of
//! known tokens.

use chrono::Datelike;

use crate::arith::build_date;
use crate::error::{Error, Result};
use crate::names::{Language, NameStyle, month_name, weekday_name};
use crate::types::TemporalValue;
use crate::validate::{date_is_valid, time_is_valid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    /// `yyyy`, unpadded
    Year,
    /// `MM`
    Month,
    /// `MMM`
    MonthShort,
    /// `MMMM`
    MonthLong,
    /// `dd`
    Day,
    /// `E`
    WeekdayShort,
    /// `EEEE`
    WeekdayLong,
    /// `HH`
    Hour,
    /// `mm`
    Minute,
    /// `ss`
    Second,
    Lit(&'static str),
}

use Piece as P;

const DASH: Piece = P::Lit("-");
const SLASH: Piece = P::Lit("/");
const DOT: Piece = P::Lit(".");
const COLON: Piece = P::Lit(":");
const SPACE: Piece = P::Lit(" ");
const COMMA: Piece = P::Lit(", ");

#[rustfmt::skip]
static PATTERNS: &[(&str, &[Piece])] = &[
    // Dates
    ("yyyy-MM-dd", &[P::Year, DASH, P::Month, DASH, P::Day]),
    ("yyyy/MM/dd", &[P::Year, SLASH, P::Month, SLASH, P::Day]),
    ("yyyy.MM.dd", &[P::Year, DOT, P::Month, DOT, P::Day]),
    ("yyyyMMdd", &[P::Year, P::Month, P::Day]),
    ("MM/dd/yyyy", &[P::Month, SLASH, P::Day, SLASH, P::Year]),
    ("dd/MM/yyyy", &[P::Day, SLASH, P::Month, SLASH, P::Year]),
    ("MM-dd-yyyy", &[P::Month, DASH, P::Day, DASH, P::Year]),
    ("dd-MM-yyyy", &[P::Day, DASH, P::Month, DASH, P::Year]),
    ("dd.MM.yyyy", &[P::Day, DOT, P::Month, DOT, P::Year]),
    ("MMM dd, yyyy", &[P::MonthShort, SPACE, P::Day, COMMA, P::Year]),
    ("MMMM dd, yyyy", &[P::MonthLong, SPACE, P::Day, COMMA, P::Year]),
    ("dd MMM yyyy", &[P::Day, SPACE, P::MonthShort, SPACE, P::Year]),
    ("dd MMMM yyyy", &[P::Day, SPACE, P::MonthLong, SPACE, P::Year]),
    ("EEEE, MMMM dd, yyyy", &[P::WeekdayLong, COMMA, P::MonthLong, SPACE, P::Day, COMMA, P::Year]),
    ("yyyy-MM-dd E", &[P::Year, DASH, P::Month, DASH, P::Day, SPACE, P::WeekdayShort]),
    ("yyyy-MM", &[P::Year, DASH, P::Month]),
    ("yyyy/MM", &[P::Year, SLASH, P::Month]),
    ("yyyyMM", &[P::Year, P::Month]),
    ("MMM yyyy", &[P::MonthShort, SPACE, P::Year]),
    ("MMMM yyyy", &[P::MonthLong, SPACE, P::Year]),
    ("yyyy", &[P::Year]),
    ("MM", &[P::Month]),
    ("MMM", &[P::MonthShort]),
    ("MMMM", &[P::MonthLong]),
    ("dd", &[P::Day]),
    ("E", &[P::WeekdayShort]),
    ("EEEE", &[P::WeekdayLong]),
    // Times
    ("HH:mm:ss", &[P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("HHmmss", &[P::Hour, P::Minute, P::Second]),
    ("HH:mm", &[P::Hour, COLON, P::Minute]),
    ("HHmm", &[P::Hour, P::Minute]),
    ("mm:ss", &[P::Minute, COLON, P::Second]),
    ("HH", &[P::Hour]),
    ("mm", &[P::Minute]),
    ("ss", &[P::Second]),
    // Dates with times
    ("yyyy-MM-dd HH:mm:ss", &[P::Year, DASH, P::Month, DASH, P::Day, SPACE, P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("yyyy-MM-dd HH:mm", &[P::Year, DASH, P::Month, DASH, P::Day, SPACE, P::Hour, COLON, P::Minute]),
    ("yyyy/MM/dd HH:mm:ss", &[P::Year, SLASH, P::Month, SLASH, P::Day, SPACE, P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("yyyy/MM/dd HH:mm", &[P::Year, SLASH, P::Month, SLASH, P::Day, SPACE, P::Hour, COLON, P::Minute]),
    ("yyyy.MM.dd HH:mm:ss", &[P::Year, DOT, P::Month, DOT, P::Day, SPACE, P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("yyyyMMdd HHmmss", &[P::Year, P::Month, P::Day, SPACE, P::Hour, P::Minute, P::Second]),
    ("yyyyMMddHHmmss", &[P::Year, P::Month, P::Day, P::Hour, P::Minute, P::Second]),
    ("yyyyMMddHHmm", &[P::Year, P::Month, P::Day, P::Hour, P::Minute]),
    ("MM/dd/yyyy HH:mm:ss", &[P::Month, SLASH, P::Day, SLASH, P::Year, SPACE, P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("dd/MM/yyyy HH:mm:ss", &[P::Day, SLASH, P::Month, SLASH, P::Year, SPACE, P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("dd-MM-yyyy HH:mm:ss", &[P::Day, DASH, P::Month, DASH, P::Year, SPACE, P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("MMM dd, yyyy HH:mm:ss", &[P::MonthShort, SPACE, P::Day, COMMA, P::Year, SPACE, P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("MMMM dd, yyyy HH:mm:ss", &[P::MonthLong, SPACE, P::Day, COMMA, P::Year, SPACE, P::Hour, COLON, P::Minute, COLON, P::Second]),
    ("MMMM dd, yyyy HH:mm", &[P::MonthLong, SPACE, P::Day, COMMA, P::Year, SPACE, P::Hour, COLON, P::Minute]),
];

fn lookup(pattern: &str) -> Option<&'static [Piece]> {
    PATTERNS
        .iter()
        .find(|(literal, _)| *literal == pattern)
        .map(|(_, pieces)| *pieces)
}

/// Every pattern the formatter accepts, in table order.
pub fn supported_patterns() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|(literal, _)| *literal)
}

/// Whether `pattern` is one of the accepted literal patterns.
pub fn is_supported_pattern(pattern: &str) -> bool {
    lookup(pattern).is_some()
}

/// Renders `value` through `pattern`.
///
/// Null month/day render as 1 and null clock fields as 0. Both the
/// defaulted date and the defaulted time must validate, whatever fields the
/// pattern shows.
pub(crate) fn render(value: &TemporalValue, pattern: &str, language: Language) -> Result<String> {
    let Some(pieces) = lookup(pattern) else {
        tracing::debug!(pattern, "unsupported format pattern");
        return Err(Error::UnsupportedPattern(pattern.to_owned()));
    };

    let unformattable = || {
        tracing::debug!(value = %value, pattern, "value fails validation for pattern");
        Error::Unformattable {
            value: value.to_string(),
            pattern: pattern.to_owned(),
        }
    };

    let v = value.with_defaults();
    if !date_is_valid(&v.date()) || !time_is_valid(&v.time()) {
        return Err(unformattable());
    }

    // Validation guarantees every field read below is present
    let year = v.year.unwrap_or_default();
    let month = v.month.unwrap_or_default();
    let day = v.day.unwrap_or_default();
    let weekday = || {
        build_date(year, month, day)
            .map(|date| date.weekday().num_days_from_sunday())
            .ok_or_else(unformattable)
    };

    let mut out = String::with_capacity(pattern.len() + 8);
    for piece in pieces {
        match *piece {
            P::Year => out.push_str(&year.to_string()),
            P::Month => out.push_str(&format!("{month:02}")),
            P::MonthShort | P::MonthLong => {
                let style = if *piece == P::MonthShort {
                    NameStyle::Short
                } else {
                    NameStyle::Long
                };
                let index = u32::try_from(month).map_err(|_| unformattable())?;
                out.push_str(month_name(index, style).ok_or_else(unformattable)?);
            }
            P::Day => out.push_str(&format!("{day:02}")),
            P::WeekdayShort | P::WeekdayLong => {
                let style = if *piece == P::WeekdayShort {
                    NameStyle::Short
                } else {
                    NameStyle::Long
                };
                let name = weekday_name(weekday()?, style, language).ok_or_else(unformattable)?;
                out.push_str(name);
            }
            P::Hour => out.push_str(&format!("{:02}", v.hour.unwrap_or_default())),
            P::Minute => out.push_str(&format!("{:02}", v.minute.unwrap_or_default())),
            P::Second => out.push_str(&format!("{:02}", v.second.unwrap_or_default())),
            P::Lit(text) => out.push_str(text),
        }
    }
    Ok(out)
}
