/// Errors raised by validating, computing and formatting operations.
///
/// Parsing never produces one of these: malformed strings degrade to
/// records with `None` fields, and the error surfaces only once such a
/// record is handed to an operation that needs a valid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Arithmetic amount was not an integer.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Value does not describe a Gregorian date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Value does not describe a time of day.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Value failed validation while being formatted.
    #[error("Cannot format {value} as {pattern}")]
    Unformattable { value: String, pattern: String },

    /// Pattern is not one of the recognized literal formats.
    #[error("Unsupported format pattern: {0}")]
    UnsupportedPattern(String),

    /// Number mask could not be split or uses an unknown integer form.
    #[error("Invalid number mask: {0}")]
    InvalidMask(String),

    /// Value handed to the number formatter is not a finite number.
    #[error("Not a number: {0}")]
    NotNumeric(String),

    /// Arithmetic left the representable calendar range.
    #[error("Result out of range: {0}")]
    OutOfRange(String),

    /// Configuration document could not be read.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// JSON form of a value, used as the diagnostic payload of errors.
pub(crate) fn serialized<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_input() {
        let err = Error::InvalidDate(r#"{"year":2023,"month":2,"day":29}"#.to_owned());
        assert_eq!(
            err.to_string(),
            r#"Invalid date: {"year":2023,"month":2,"day":29}"#
        );

        let err = Error::Unformattable {
            value: "{}".to_owned(),
            pattern: "yyyy-MM-dd".to_owned(),
        };
        assert_eq!(err.to_string(), "Cannot format {} as yyyy-MM-dd");
    }

    #[test]
    fn test_serialized() {
        assert_eq!(serialized("abc"), r#""abc""#);
        assert_eq!(serialized(&1.5), "1.5");
    }
}
