//! Fixed-locale calendar, clock and number formatting.
//!
//! Strings and chrono values are parsed into records with optional fields,
//! validated against the Gregorian calendar, shifted and compared by unit,
//! and rendered through a fixed table of literal patterns. Numbers render
//! through `#,##0.00`-style masks, and text can be measured and cut by a
//! configurable multi-byte cost.

mod arith;
mod bytes;
mod config;
mod consts;
mod error;
mod names;
mod number;
mod parse;
mod pattern;
mod prelude;
mod text;
mod types;
mod validate;

pub use arith::{IntoAmount, Unit, add, diff};
pub use bytes::unit_cost;
pub use config::{ByteSizes, Config};
pub use consts::*;
pub use error::{Error, Result};
pub use names::{Language, NameStyle, month_name, weekday_name};
pub use number::Numeric;
pub use parse::{parse_date, parse_datetime, parse_time};
pub use pattern::{is_supported_pattern, supported_patterns};
pub use text::{is_alphabetic, is_alphanumeric, is_integer, is_numeric};
pub use types::{DateValue, Temporal, TemporalValue, TimeValue};
pub use validate::{is_date, is_datetime, is_time};

use crate::prelude::*;
use chrono::Local;

/// A single configured rendering of a temporal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Part {
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "time")]
    Time,
    #[display(fmt = "datetime")]
    DateTime,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "month name")]
    MonthName,
    #[display(fmt = "year and month")]
    YearMonth,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "day of week")]
    DayOfWeek,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "hour and minute")]
    HourMinute,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

/// The local wall clock, to the second.
pub fn now() -> TemporalValue {
    Local::now().naive_local().into()
}

/// Today's date on the local wall clock.
pub fn today() -> DateValue {
    Local::now().date_naive().into()
}

/// Operations that read formats, names or byte sizes from a [`Config`].
///
/// Immutable once built; share one across threads freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds an engine from a (possibly partial) JSON configuration.
    ///
    /// # Errors
    /// Returns `Error::Config` if the document cannot be read.
    pub fn from_json(json: &str) -> Result<Self> {
        Config::from_json(json).map(Self::new)
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn default_pattern(&self, value: &TemporalValue) -> &str {
        if value.has_time() {
            &self.config.datetime_format
        } else {
            &self.config.date_format
        }
    }

    fn part_pattern(&self, part: Part) -> &str {
        let c = &self.config;
        match part {
            Part::Date => &c.date_format,
            Part::Time => &c.time_format,
            Part::DateTime => &c.datetime_format,
            Part::Year => &c.year_format,
            Part::Month => &c.month_format,
            Part::MonthName => &c.month_name_format,
            Part::YearMonth => &c.year_month_format,
            Part::Day => &c.day_format,
            Part::DayOfWeek => &c.day_of_week_format,
            Part::Hour => &c.hour_format,
            Part::HourMinute => &c.hour_minute_format,
            Part::Minute => &c.minute_format,
            Part::Second => &c.second_format,
        }
    }

    /// Renders `value` through `pattern`, or through the configured
    /// datetime format if the value has an hour and the date format if not.
    ///
    /// # Errors
    /// `UnsupportedPattern` for a pattern outside the fixed table,
    /// `Unformattable` if the components it shows are invalid.
    pub fn format<T: Temporal + ?Sized>(&self, value: &T, pattern: Option<&str>) -> Result<String> {
        let value = value.to_temporal();
        let pattern = pattern.unwrap_or_else(|| self.default_pattern(&value));
        pattern::render(&value, pattern, self.config.language)
    }

    /// Renders `value` through the configured format of `part`.
    ///
    /// # Errors
    /// Same as [`Engine::format`].
    pub fn format_part<T: Temporal + ?Sized>(&self, value: &T, part: Part) -> Result<String> {
        self.format(value, Some(self.part_pattern(part)))
    }

    /// Renders the current local time through the configured format of `part`.
    ///
    /// # Errors
    /// `UnsupportedPattern` if the configured format is not in the table.
    pub fn current(&self, part: Part) -> Result<String> {
        self.format_part(&now(), part)
    }

    /// [`add`] for text input, rendering the result back to text.
    ///
    /// Without `format` the result uses the configured datetime format if
    /// `text` carried a time and the date format if it did not.
    ///
    /// # Errors
    /// Everything [`add`] and [`Engine::format`] return.
    pub fn add_str(
        &self,
        text: &str,
        amount: impl IntoAmount,
        unit: Unit,
        format: Option<&str>,
    ) -> Result<String> {
        let original = text.to_temporal();
        let shifted = add(text, amount, unit)?;
        let pattern = format.unwrap_or_else(|| self.default_pattern(&original));
        pattern::render(&shifted, pattern, self.config.language)
    }

    /// Renders a number through `mask`, or the configured number format.
    ///
    /// # Errors
    /// `NotNumeric` for non-numbers and non-finite values, `InvalidMask`
    /// for a mask that cannot be split or has an unknown integer form.
    pub fn format_number<N: Numeric + ?Sized>(&self, value: &N, mask: Option<&str>) -> Result<String> {
        number::format_numeric(value, mask.unwrap_or(&self.config.number_format))
    }

    /// Byte cost of `text` under the configured sizes.
    pub fn byte_length(&self, text: &str) -> usize {
        bytes::byte_length(text, &self.config.byte_sizes)
    }

    /// Longest prefix of `text` within `max_bytes` under the configured sizes.
    pub fn truncate_to_byte_length<'a>(&self, text: &'a str, max_bytes: usize) -> &'a str {
        bytes::truncate_to_byte_length(text, max_bytes, &self.config.byte_sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::default()
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_format_default_pattern() {
        let e = engine();
        assert_eq!(e.format(&DateValue::new(1991, 8, 15), None).unwrap(), "1991-08-15");
        assert_eq!(
            e.format(&TemporalValue::new(1991, 8, 15, 0, 0, 0), None).unwrap(),
            "1991-08-15 00:00:00"
        );
        assert_eq!(e.format("1991-08-15 9:5:7", None).unwrap(), "1991-08-15 09:05:07");
    }

    #[test]
    fn test_format_round_trips() {
        let e = engine();
        let values = [
            TemporalValue::new(2024, 2, 29, 23, 59, 59),
            TemporalValue::new(1600, 2, 29, 0, 0, 0),
            TemporalValue::new(1599, 12, 31, 12, 30, 0),
            TemporalValue::new(1991, 8, 15, 7, 5, 3),
        ];
        let patterns = [
            "yyyy-MM-dd",
            "yyyy/MM/dd",
            "yyyyMMdd",
            "yyyy-MM",
            "yyyy/MM",
            "yyyy-MM-dd HH:mm:ss",
            "yyyy-MM-dd HH:mm",
            "yyyy/MM/dd HH:mm:ss",
            "yyyy/MM/dd HH:mm",
            "yyyyMMdd HHmmss",
        ];
        for value in &values {
            for pattern in patterns {
                let first = e.format(value, Some(pattern)).unwrap();
                let reparsed = parse_datetime(&first);
                let second = e.format(&reparsed, Some(pattern)).unwrap();
                assert_eq!(first, second, "{value} through {pattern}");
            }
        }
    }

    #[test]
    fn test_format_errors() {
        let e = engine();
        assert_eq!(
            e.format(&DateValue::new(2024, 1, 1), Some("yyyy-M-d")),
            Err(Error::UnsupportedPattern("yyyy-M-d".to_owned()))
        );
        assert!(matches!(
            e.format("garbage", None),
            Err(Error::Unformattable { .. })
        ));
    }

    #[test]
    fn test_format_part() {
        let e = engine();
        let value = TemporalValue::new(2024, 2, 29, 7, 5, 3);
        let cases = [
            (Part::Date, "2024-02-29"),
            (Part::Time, "07:05:03"),
            (Part::DateTime, "2024-02-29 07:05:03"),
            (Part::Year, "2024"),
            (Part::Month, "02"),
            (Part::MonthName, "February"),
            (Part::YearMonth, "2024-02"),
            (Part::Day, "29"),
            (Part::DayOfWeek, "Thu"),
            (Part::Hour, "07"),
            (Part::HourMinute, "07:05"),
            (Part::Minute, "05"),
            (Part::Second, "03"),
        ];
        for (part, expected) in cases {
            assert_eq!(e.format_part(&value, part).unwrap(), expected, "{part}");
        }
    }

    #[test]
    fn test_configured_formats() {
        let e = Engine::from_json(
            r#"{"date_format": "dd/MM/yyyy", "day_of_week_format": "EEEE", "language": "korean"}"#,
        )
        .unwrap();
        let value = DateValue::new(2024, 2, 29);
        assert_eq!(e.format(&value, None).unwrap(), "29/02/2024");
        assert_eq!(e.format_part(&value, Part::DayOfWeek).unwrap(), "목요일");

        let e = Engine::from_json(r#"{"hour_format": "H"}"#).unwrap();
        assert!(matches!(
            e.format_part(&value, Part::Hour),
            Err(Error::UnsupportedPattern(_))
        ));
    }

    #[test]
    fn test_add_str() {
        let e = engine();
        assert_eq!(
            e.add_str("2024-01-31", 1, Unit::from("M"), None).unwrap(),
            "2024-03-02"
        );
        assert_eq!(
            e.add_str("2024-12-31 23:30:00", 30, Unit::Minute, None).unwrap(),
            "2025-01-01 00:00:00"
        );
        assert_eq!(
            e.add_str("20240131", 1, Unit::Day, Some("MMMM dd, yyyy")).unwrap(),
            "February 01, 2024"
        );
        assert!(matches!(
            e.add_str("2024-02-30", 1, Unit::Day, None),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            e.add_str("2024-02-01", 0.5, Unit::Day, None),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_format_number() {
        let e = engine();
        assert_eq!(e.format_number(&1_234_567.891, None).unwrap(), "1,234,567");
        assert_eq!(e.format_number(&1234.5678, Some("#,###.00")).unwrap(), "1,234.56");
        assert_eq!(e.format_number(&0.25, Some("#,##0%")).unwrap(), "25%");
        assert_eq!(e.format_number(&-1234, Some("#,###")).unwrap(), "-1,234");
        assert!(matches!(
            e.format_number("twelve", None),
            Err(Error::NotNumeric(_))
        ));

        let e = Engine::from_json(r##"{"number_format": "#,##0.00"}"##).unwrap();
        assert_eq!(e.format_number(&3, None).unwrap(), "3.00");
    }

    #[test]
    fn test_byte_length() {
        let e = engine();
        assert_eq!(e.byte_length("Hello"), 5);
        assert_eq!(e.byte_length("안녕하세요"), 15);
        assert_eq!(e.truncate_to_byte_length("Hello, World!", 5), "Hello");

        let e = Engine::from_json(r#"{"byte_sizes": {"three": 2}}"#).unwrap();
        assert_eq!(e.byte_length("안녕하세요"), 10);
        assert_eq!(e.truncate_to_byte_length("안녕하세요", 5), "안녕");
    }

    #[test]
    fn test_now_and_today() {
        let current = now();
        assert!(is_datetime(&current));
        assert!(is_date(&today()));

        let year = engine().current(Part::Year).unwrap();
        assert!(is_numeric(&year));
    }

    #[test]
    fn test_constants() {
        assert_eq!(PATTERN_VALIDATION_FLOOR, 16_000_101);
    }
}
