use crate::consts::{DATETIME_SEPARATOR, DEFAULT_CLOCK, DEFAULT_DAY, DEFAULT_MONTH};
use crate::error::serialized;
use crate::parse::{parse_date, parse_datetime, parse_time};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A calendar date whose components may each be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateValue {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

/// A time of day whose components may each be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeValue {
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub second: Option<i32>,
}

/// Date and time components together, each optional.
///
/// `None` means the caller never specified the component and is kept apart
/// from an explicit zero. Month and day fall back to 1 and clock fields to
/// 0 only inside validation, arithmetic and formatting, which all work on a
/// copy produced by [`TemporalValue::with_defaults`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemporalValue {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub second: Option<i32>,
}

impl DateValue {
    /// Creates a fully specified date (not validated)
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    /// True when no component is known
    pub const fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

impl TimeValue {
    /// Creates a fully specified time (not validated)
    pub const fn new(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }

    /// True when no component is known
    pub const fn is_empty(&self) -> bool {
        self.hour.is_none() && self.minute.is_none() && self.second.is_none()
    }
}

impl TemporalValue {
    /// Creates a fully specified date and time (not validated)
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }

    /// Merges a date and a time into one value
    pub const fn from_parts(date: DateValue, time: TimeValue) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
        }
    }

    /// Returns the date components
    pub const fn date(&self) -> DateValue {
        DateValue {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Returns the time components
    pub const fn time(&self) -> TimeValue {
        TimeValue {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }

    /// Whether the value carries a time of day. Decided by the hour alone.
    pub const fn has_time(&self) -> bool {
        self.hour.is_some()
    }

    /// Copy with month/day defaulted to 1 and clock fields to 0.
    /// The year stays as it is: a date without one is never valid.
    #[must_use]
    pub fn with_defaults(&self) -> Self {
        Self {
            year: self.year,
            month: Some(self.month.unwrap_or(DEFAULT_MONTH)),
            day: Some(self.day.unwrap_or(DEFAULT_DAY)),
            hour: Some(self.hour.unwrap_or(DEFAULT_CLOCK)),
            minute: Some(self.minute.unwrap_or(DEFAULT_CLOCK)),
            second: Some(self.second.unwrap_or(DEFAULT_CLOCK)),
        }
    }
}

impl From<DateValue> for TemporalValue {
    fn from(date: DateValue) -> Self {
        Self::from_parts(date, TimeValue::default())
    }
}

impl From<TimeValue> for TemporalValue {
    fn from(time: TimeValue) -> Self {
        Self::from_parts(DateValue::default(), time)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: Some(date.year()),
            month: i32::try_from(date.month()).ok(),
            day: i32::try_from(date.day()).ok(),
        }
    }
}

impl From<NaiveTime> for TimeValue {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: i32::try_from(time.hour()).ok(),
            minute: i32::try_from(time.minute()).ok(),
            second: i32::try_from(time.second()).ok(),
        }
    }
}

impl From<NaiveDateTime> for TemporalValue {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_parts(datetime.date().into(), datetime.time().into())
    }
}

impl FromStr for DateValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_date(s))
    }
}

impl FromStr for TimeValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_time(s))
    }
}

impl FromStr for TemporalValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_datetime(s))
    }
}

macro_rules! display_as_json {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&serialized(self))
            }
        })*
    };
}

display_as_json!(DateValue, TimeValue, TemporalValue);

/// Anything the engine can read a date and/or time from.
///
/// Implemented for the three records, chrono's naive values and strings.
/// Strings are parsed on every call.
pub trait Temporal {
    /// Date components of the value
    fn date_part(&self) -> DateValue;

    /// Time components of the value
    fn time_part(&self) -> TimeValue;

    /// All components of the value
    fn to_temporal(&self) -> TemporalValue {
        TemporalValue::from_parts(self.date_part(), self.time_part())
    }

    /// Whether the value was given as text
    fn is_text(&self) -> bool {
        false
    }
}

impl Temporal for TemporalValue {
    fn date_part(&self) -> DateValue {
        self.date()
    }

    fn time_part(&self) -> TimeValue {
        self.time()
    }

    fn to_temporal(&self) -> TemporalValue {
        *self
    }
}

impl Temporal for DateValue {
    fn date_part(&self) -> DateValue {
        *self
    }

    fn time_part(&self) -> TimeValue {
        TimeValue::default()
    }
}

impl Temporal for TimeValue {
    fn date_part(&self) -> DateValue {
        DateValue::default()
    }

    fn time_part(&self) -> TimeValue {
        *self
    }
}

impl Temporal for NaiveDate {
    fn date_part(&self) -> DateValue {
        (*self).into()
    }

    fn time_part(&self) -> TimeValue {
        TimeValue::default()
    }
}

impl Temporal for NaiveTime {
    fn date_part(&self) -> DateValue {
        DateValue::default()
    }

    fn time_part(&self) -> TimeValue {
        (*self).into()
    }
}

impl Temporal for NaiveDateTime {
    fn date_part(&self) -> DateValue {
        self.date().into()
    }

    fn time_part(&self) -> TimeValue {
        self.time().into()
    }
}

impl Temporal for str {
    fn date_part(&self) -> DateValue {
        let head = self.trim().split(DATETIME_SEPARATOR).next().unwrap_or_default();
        parse_date(head)
    }

    /// The token after the first space, or the whole string without one
    fn time_part(&self) -> TimeValue {
        let trimmed = self.trim();
        match trimmed.split_once(DATETIME_SEPARATOR) {
            Some((_, tail)) => parse_time(tail),
            None => parse_time(trimmed),
        }
    }

    fn to_temporal(&self) -> TemporalValue {
        parse_datetime(self)
    }

    fn is_text(&self) -> bool {
        true
    }
}

impl Temporal for String {
    fn date_part(&self) -> DateValue {
        self.as_str().date_part()
    }

    fn time_part(&self) -> TimeValue {
        self.as_str().time_part()
    }

    fn to_temporal(&self) -> TemporalValue {
        self.as_str().to_temporal()
    }

    fn is_text(&self) -> bool {
        true
    }
}
