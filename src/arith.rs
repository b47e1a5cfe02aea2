use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

use crate::consts::{MAX_MONTH, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::error::{Error, Result, serialized};
use crate::prelude::*;
use crate::text::is_integer;
use crate::types::{Temporal, TemporalValue};
use crate::validate::{date_is_valid, time_is_valid};

/// Calendar or clock field targeted by [`add`] and [`diff`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[default]
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

impl From<&str> for Unit {
    /// Reads a unit token. Unknown tokens fall back to [`Unit::Day`].
    ///
    /// Case matters for the single letters: `M` is month, `m` is minute.
    fn from(token: &str) -> Self {
        match token {
            "y" | "Y" | "year" | "years" => Self::Year,
            "M" | "month" | "months" => Self::Month,
            "h" | "H" | "hour" | "hours" => Self::Hour,
            "m" | "minute" | "minutes" => Self::Minute,
            "s" | "second" | "seconds" => Self::Second,
            _ => Self::Day,
        }
    }
}

impl From<Option<&str>> for Unit {
    fn from(token: Option<&str>) -> Self {
        token.map(Self::from).unwrap_or_default()
    }
}

impl Unit {
    /// Fixed length of the unit; `None` for the calendar-dependent ones
    const fn millis(self) -> Option<i64> {
        match self {
            Self::Year | Self::Month => None,
            Self::Day => Some(MILLIS_PER_DAY),
            Self::Hour => Some(MILLIS_PER_HOUR),
            Self::Minute => Some(MILLIS_PER_MINUTE),
            Self::Second => Some(MILLIS_PER_SECOND),
        }
    }
}

/// An amount that must turn out to be a whole number.
pub trait IntoAmount {
    /// # Errors
    /// Returns `Error::InvalidAmount` if the value is not an integer.
    fn into_amount(self) -> Result<i64>;
}

macro_rules! lossless_amount {
    ($($ty:ty),*) => {
        $(impl IntoAmount for $ty {
            fn into_amount(self) -> Result<i64> {
                Ok(i64::from(self))
            }
        })*
    };
}

lossless_amount!(i8, i16, i32, i64, u8, u16, u32);

impl IntoAmount for u64 {
    fn into_amount(self) -> Result<i64> {
        i64::try_from(self).map_err(|_| Error::InvalidAmount(self.to_string()))
    }
}

impl IntoAmount for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn into_amount(self) -> Result<i64> {
        let in_range = self >= i64::MIN as f64 && self < i64::MAX as f64;
        if self.is_finite() && self.fract() == 0.0 && in_range {
            Ok(self as i64)
        } else {
            Err(Error::InvalidAmount(serialized(&self)))
        }
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<i64> {
        let trimmed = self.trim();
        if !is_integer(trimmed) {
            return Err(Error::InvalidAmount(serialized(self)));
        }
        trimmed
            .parse()
            .map_err(|_| Error::InvalidAmount(serialized(self)))
    }
}

/// Builds a date the way a lenient calendar does: months past December
/// roll into the next year and days past the month's end roll into the
/// next month, in either direction.
pub(crate) fn build_date(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    let months = i64::from(year) * i64::from(MAX_MONTH) + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(i64::from(MAX_MONTH))).ok()?;
    let month = u32::try_from(months.rem_euclid(i64::from(MAX_MONTH)) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(TimeDelta::try_days(i64::from(day) - 1)?)
}

/// Builds an instant from a defaulted value, rolling every field over.
pub(crate) fn build_instant(value: &TemporalValue) -> Option<NaiveDateTime> {
    let midnight = build_date(value.year?, value.month?, value.day?)?.and_hms_opt(0, 0, 0)?;
    let seconds = i64::from(value.hour?) * 3_600 + i64::from(value.minute?) * 60
        + i64::from(value.second?);
    midnight.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Defaulted copy of `value`, or the first validation failure.
fn prepare<T: Temporal + ?Sized>(value: &T) -> Result<TemporalValue> {
    let original = value.to_temporal();
    let defaulted = original.with_defaults();

    if !date_is_valid(&defaulted.date()) {
        tracing::debug!(value = %original, "rejecting invalid date");
        return Err(Error::InvalidDate(original.to_string()));
    }
    if !time_is_valid(&defaulted.time()) {
        tracing::debug!(value = %original, "rejecting invalid time");
        return Err(Error::InvalidTime(original.to_string()));
    }
    Ok(defaulted)
}

fn instant_of(value: &TemporalValue) -> Result<NaiveDateTime> {
    build_instant(value).ok_or_else(|| Error::OutOfRange(value.to_string()))
}

/// Moves the calendar fields and rebuilds, letting the day overflow
fn shift_calendar(start: &TemporalValue, years: i64, months: i64) -> Option<NaiveDateTime> {
    let year = i32::try_from(i64::from(start.year?).checked_add(years)?).ok()?;
    let month = i32::try_from(i64::from(start.month?).checked_add(months)?).ok()?;
    build_instant(&TemporalValue {
        year: Some(year),
        month: Some(month),
        ..*start
    })
}

/// Adds `amount` of `unit` to `value`.
///
/// Missing month/day default to 1 and missing clock fields to 0 before
/// the value is validated. The calendar rolls over naturally, so adding a
/// month to January 31st of 2024 lands on March 2nd.
///
/// # Errors
/// `InvalidAmount` for a non-integer amount, `InvalidDate`/`InvalidTime`
/// for an invalid value, `OutOfRange` if the result cannot be represented.
pub fn add<T: Temporal + ?Sized>(
    value: &T,
    amount: impl IntoAmount,
    unit: Unit,
) -> Result<TemporalValue> {
    let amount = amount.into_amount()?;
    let start = prepare(value)?;
    let instant = instant_of(&start)?;

    let shifted = match unit {
        Unit::Year => shift_calendar(&start, amount, 0),
        Unit::Month => shift_calendar(&start, 0, amount),
        Unit::Day => TimeDelta::try_days(amount).and_then(|d| instant.checked_add_signed(d)),
        Unit::Hour => TimeDelta::try_hours(amount).and_then(|d| instant.checked_add_signed(d)),
        Unit::Minute => TimeDelta::try_minutes(amount).and_then(|d| instant.checked_add_signed(d)),
        Unit::Second => TimeDelta::try_seconds(amount).and_then(|d| instant.checked_add_signed(d)),
    };

    shifted.map(TemporalValue::from).ok_or_else(|| {
        tracing::debug!(value = %start, amount, %unit, "addition left the calendar range");
        Error::OutOfRange(format!("{start} + {amount} {unit}"))
    })
}

/// Signed distance from `value1` to `value2` in whole `unit`s.
///
/// Years compare the year fields only and months compare `year * 12 +
/// month`. Fixed-length units divide the gap and truncate toward zero, so
/// swapping the arguments always negates the result.
///
/// # Errors
/// `InvalidDate`/`InvalidTime` if either value is invalid.
pub fn diff<A, B>(value1: &A, value2: &B, unit: Unit) -> Result<i64>
where
    A: Temporal + ?Sized,
    B: Temporal + ?Sized,
{
    let start = instant_of(&prepare(value1)?)?;
    let end = instant_of(&prepare(value2)?)?;

    let months = |at: NaiveDateTime| {
        i64::from(at.year()) * i64::from(MAX_MONTH) + i64::from(at.month())
    };

    Ok(match unit.millis() {
        None if unit == Unit::Year => i64::from(end.year()) - i64::from(start.year()),
        None => months(end) - months(start),
        Some(millis) => (end - start).num_milliseconds() / millis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DateValue, TimeValue};

    fn date(year: i32, month: i32, day: i32) -> DateValue {
        DateValue::new(year, month, day)
    }

    #[test]
    fn test_unit_tokens() {
        assert_eq!(Unit::from("y"), Unit::Year);
        assert_eq!(Unit::from("M"), Unit::Month);
        assert_eq!(Unit::from("m"), Unit::Minute);
        assert_eq!(Unit::from("H"), Unit::Hour);
        assert_eq!(Unit::from("seconds"), Unit::Second);
        assert_eq!(Unit::from("fortnight"), Unit::Day);
        assert_eq!(Unit::from(None), Unit::Day);
        assert_eq!(Unit::default(), Unit::Day);
        assert_eq!(Unit::Month.to_string(), "month");
    }

    #[test]
    fn test_build_date_rolls_over() {
        assert_eq!(build_date(2024, 13, 1), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(build_date(2024, 0, 1), NaiveDate::from_ymd_opt(2023, 12, 1));
        assert_eq!(build_date(2023, 2, 29), NaiveDate::from_ymd_opt(2023, 3, 1));
        assert_eq!(build_date(2024, 3, 0), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_add_month_rolls_over() {
        let result = add(&date(2024, 1, 31), 1, Unit::Month).unwrap();
        assert_eq!(result, TemporalValue::new(2024, 3, 2, 0, 0, 0));

        let result = add(&date(2023, 1, 31), 1, Unit::Month).unwrap();
        assert_eq!(result, TemporalValue::new(2023, 3, 3, 0, 0, 0));
    }

    #[test]
    fn test_add_year_from_leap_day() {
        let result = add(&date(2024, 2, 29), 1, Unit::Year).unwrap();
        assert_eq!(result, TemporalValue::new(2025, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_add_negative_months_across_year() {
        let result = add(&date(2024, 1, 15), -2, Unit::Month).unwrap();
        assert_eq!(result, TemporalValue::new(2023, 11, 15, 0, 0, 0));
    }

    #[test]
    fn test_add_clock_units() {
        let start = TemporalValue::new(2024, 12, 31, 23, 59, 59);
        assert_eq!(
            add(&start, 1, Unit::Second).unwrap(),
            TemporalValue::new(2025, 1, 1, 0, 0, 0)
        );
        assert_eq!(
            add(&start, 2, Unit::Minute).unwrap(),
            TemporalValue::new(2025, 1, 1, 0, 1, 59)
        );
        assert_eq!(
            add(&start, -24, Unit::Hour).unwrap(),
            TemporalValue::new(2024, 12, 30, 23, 59, 59)
        );
        assert_eq!(
            add(&start, 60, Unit::Day).unwrap(),
            TemporalValue::new(2025, 3, 1, 23, 59, 59)
        );
    }

    #[test]
    fn test_add_does_not_touch_input() {
        let start = DateValue {
            year: Some(2024),
            month: None,
            day: None,
        };
        let result = add(&start, 1, Unit::Day).unwrap();
        assert_eq!(result, TemporalValue::new(2024, 1, 2, 0, 0, 0));
        assert_eq!(start.month, None);
    }

    #[test]
    fn test_add_from_string() {
        let result = add("2024-02-28 23:00:00", 1, Unit::from("h")).unwrap();
        assert_eq!(result, TemporalValue::new(2024, 2, 29, 0, 0, 0));
    }

    #[test]
    fn test_add_invalid_amount() {
        let result = add(&date(2024, 1, 1), 1.5, Unit::Day);
        assert!(matches!(result, Err(Error::InvalidAmount(_))));

        let result = add(&date(2024, 1, 1), f64::NAN, Unit::Day);
        assert!(matches!(result, Err(Error::InvalidAmount(_))));

        let result = add(&date(2024, 1, 1), "two", Unit::Day);
        assert!(matches!(result, Err(Error::InvalidAmount(_))));

        let result = add(&date(2024, 1, 1), 2.0, Unit::Day).unwrap();
        assert_eq!(result.day, Some(3));

        let result = add(&date(2024, 1, 1), " -1 ", Unit::Day).unwrap();
        assert_eq!(result, TemporalValue::new(2023, 12, 31, 0, 0, 0));
    }

    #[test]
    fn test_add_invalid_value() {
        let result = add(&date(2023, 2, 29), 1, Unit::Day);
        assert_eq!(
            result,
            Err(Error::InvalidDate(
                r#"{"year":2023,"month":2,"day":29,"hour":null,"minute":null,"second":null}"#
                    .to_owned()
            ))
        );

        let value = TemporalValue::new(2024, 1, 1, 25, 0, 0);
        let result = add(&value, 1, Unit::Day);
        assert!(matches!(result, Err(Error::InvalidTime(_))));

        let result = add(&TimeValue::new(1, 0, 0), 1, Unit::Hour);
        assert!(matches!(result, Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_add_out_of_range() {
        let result = add(&date(2024, 1, 1), i64::MAX, Unit::Year);
        assert!(matches!(result, Err(Error::OutOfRange(_))));

        let result = add(&date(2024, 1, 1), i64::MAX, Unit::Second);
        assert!(matches!(result, Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_diff_units() {
        let a = TemporalValue::new(2023, 11, 30, 12, 0, 0);
        let b = TemporalValue::new(2024, 2, 1, 6, 30, 15);

        assert_eq!(diff(&a, &b, Unit::Year).unwrap(), 1);
        assert_eq!(diff(&a, &b, Unit::Month).unwrap(), 3);
        assert_eq!(diff(&a, &b, Unit::Day).unwrap(), 62);
        assert_eq!(diff(&a, &b, Unit::Hour).unwrap(), 1_506);
        assert_eq!(diff(&a, &b, Unit::Minute).unwrap(), 90_390);
        assert_eq!(diff(&a, &b, Unit::Second).unwrap(), 5_423_415);
    }

    #[test]
    fn test_diff_is_antisymmetric() {
        let pairs = [
            (date(2024, 1, 1), date(2024, 12, 31)),
            (date(1599, 2, 28), date(1600, 2, 29)),
            (date(2000, 3, 1), date(1999, 2, 28)),
        ];
        for (a, b) in &pairs {
            for unit in [Unit::Year, Unit::Month, Unit::Day, Unit::Hour] {
                assert_eq!(
                    diff(a, b, unit).unwrap(),
                    -diff(b, a, unit).unwrap(),
                    "{a} vs {b} in {unit}"
                );
            }
        }

        let a = TemporalValue::new(2024, 1, 1, 0, 0, 0);
        let b = TemporalValue::new(2024, 1, 2, 12, 0, 0);
        assert_eq!(diff(&a, &b, Unit::Day).unwrap(), 1);
        assert_eq!(diff(&b, &a, Unit::Day).unwrap(), -1);
    }

    #[test]
    fn test_diff_mixed_inputs() {
        let days = diff("2024-02-01", &date(2024, 3, 1), Unit::from("d")).unwrap();
        assert_eq!(days, 29);
    }

    #[test]
    fn test_diff_invalid() {
        let result = diff(&date(2024, 1, 1), &date(2024, 2, 30), Unit::Day);
        assert!(matches!(result, Err(Error::InvalidDate(_))));
    }
}
