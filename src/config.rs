use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FOUR_BYTE_SIZE, DEFAULT_THREE_BYTE_SIZE, DEFAULT_TWO_BYTE_SIZE};
use crate::error::{Error, Result};
use crate::names::Language;

/// Byte cost of a UTF-16 code unit outside the ASCII range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ByteSizes {
    /// Cost of a unit in `0x80..=0x7FF`
    pub two: usize,
    /// Cost of a unit in `0x800..=0xFFFF`
    pub three: usize,
    /// Cost of a unit above `0xFFFF`
    pub four: usize,
}

impl Default for ByteSizes {
    fn default() -> Self {
        Self {
            two: DEFAULT_TWO_BYTE_SIZE,
            three: DEFAULT_THREE_BYTE_SIZE,
            four: DEFAULT_FOUR_BYTE_SIZE,
        }
    }
}

/// Default formats and byte sizes read by [`crate::Engine`].
///
/// Every field may be left out of a configuration document; missing
/// fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub date_format: String,
    pub time_format: String,
    pub datetime_format: String,
    pub year_format: String,
    pub month_format: String,
    pub month_name_format: String,
    pub year_month_format: String,
    pub day_format: String,
    pub day_of_week_format: String,
    pub hour_format: String,
    pub hour_minute_format: String,
    pub minute_format: String,
    pub second_format: String,
    pub number_format: String,
    /// Language of weekday names
    pub language: Language,
    pub byte_sizes: ByteSizes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: "yyyy-MM-dd".to_owned(),
            time_format: "HH:mm:ss".to_owned(),
            datetime_format: "yyyy-MM-dd HH:mm:ss".to_owned(),
            year_format: "yyyy".to_owned(),
            month_format: "MM".to_owned(),
            month_name_format: "MMMM".to_owned(),
            year_month_format: "yyyy-MM".to_owned(),
            day_format: "dd".to_owned(),
            day_of_week_format: "E".to_owned(),
            hour_format: "HH".to_owned(),
            hour_minute_format: "HH:mm".to_owned(),
            minute_format: "mm".to_owned(),
            second_format: "ss".to_owned(),
            number_format: "#,##0".to_owned(),
            language: Language::default(),
            byte_sizes: ByteSizes::default(),
        }
    }
}

impl Config {
    /// Reads a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns `Error::Config` if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.date_format, "yyyy-MM-dd");
        assert_eq!(config.datetime_format, "yyyy-MM-dd HH:mm:ss");
        assert_eq!(config.number_format, "#,##0");
        assert_eq!(config.language, Language::English);
        assert_eq!(
            config.byte_sizes,
            ByteSizes {
                two: 2,
                three: 3,
                four: 4
            }
        );
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(
            r#"{"date_format": "yyyy/MM/dd", "language": "korean", "byte_sizes": {"three": 2}}"#,
        )
        .unwrap();
        assert_eq!(config.date_format, "yyyy/MM/dd");
        assert_eq!(config.language, Language::Korean);
        assert_eq!(config.byte_sizes.three, 2);
        assert_eq!(config.byte_sizes.two, 2);
        assert_eq!(config.time_format, "HH:mm:ss");
    }

    #[test]
    fn test_invalid_json() {
        let result = Config::from_json(r#"{"byte_sizes": {"two": "many"}}"#);
        assert!(matches!(result, Err(Error::Config(_))));

        let result = Config::from_json("not json");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = Config::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
