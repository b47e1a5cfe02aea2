//! Mask-driven number rendering with fixed Western punctuation.
//!
//! A mask is literal prefix text, a run of `#`, `0`, `,` and `.`, then
//! literal suffix text. Grouping is always `,` every three digits and the
//! decimal point is always `.`, whatever the runtime locale.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{DECIMAL_POINT, GROUP_SEPARATOR, GROUP_WIDTH};
use crate::error::{Error, Result, serialized};
use crate::text::is_integer;

static MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^#0,.]*)([#0,.]+)(.*)$").expect("valid regex"));

/// A value the number formatter accepts.
pub trait Numeric {
    /// The value as a float, `None` if it is not a number
    fn to_number(&self) -> Option<f64>;

    /// Diagnostic form of the value
    fn describe(&self) -> String;
}

macro_rules! numeric_primitive {
    ($($ty:ty),*) => {
        $(impl Numeric for $ty {
            fn to_number(&self) -> Option<f64> {
                Some(f64::from(*self))
            }

            fn describe(&self) -> String {
                self.to_string()
            }
        })*
    };
}

numeric_primitive!(i8, i16, i32, u8, u16, u32, f32);

impl Numeric for f64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

macro_rules! numeric_wide {
    ($($ty:ty),*) => {
        $(impl Numeric for $ty {
            #[allow(clippy::cast_precision_loss)]
            fn to_number(&self) -> Option<f64> {
                Some(*self as f64)
            }

            fn describe(&self) -> String {
                self.to_string()
            }
        })*
    };
}

numeric_wide!(i64, u64);

impl Numeric for str {
    fn to_number(&self) -> Option<f64> {
        let trimmed = self.trim();
        if is_integer(trimmed) {
            return trimmed.parse::<i64>().ok().and_then(|n| n.to_number());
        }
        trimmed.parse().ok()
    }

    fn describe(&self) -> String {
        serialized(self)
    }
}

impl Numeric for String {
    fn to_number(&self) -> Option<f64> {
        self.as_str().to_number()
    }

    fn describe(&self) -> String {
        self.as_str().describe()
    }
}

/// Integer part of a mask. `#` forms may leave the integer part out, `0`
/// forms always print it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IntegerMask {
    required: bool,
    grouped: bool,
}

impl IntegerMask {
    fn parse(mask: &str) -> Option<Self> {
        let (required, grouped) = match mask {
            "#,###" => (false, true),
            "#" => (false, false),
            "#,##0" => (true, true),
            "0" => (true, false),
            _ => return None,
        };
        Some(Self { required, grouped })
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_WIDTH);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % GROUP_WIDTH == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    out
}

/// Multiplies a decimal digit string by 100 by moving the point, so the
/// scaled digits are exactly the shortest form of the input shifted.
fn scale_percent(integer: &str, fraction: &str) -> (String, String) {
    let shifted = fraction.chars().chain(std::iter::repeat('0')).take(2);
    let mut scaled: String = integer.chars().chain(shifted).collect();
    let leading = scaled.len() - scaled.trim_start_matches('0').len();
    scaled.replace_range(..leading.min(scaled.len() - 1), "");
    (scaled, fraction.get(2..).unwrap_or("").to_owned())
}

/// Renders `value` through `mask`.
///
/// Fraction digits past the decimal mask are cut, not rounded, and digits
/// up to the mask's last `0` are always shown. A `%` or ` %` suffix scales
/// the value by 100 on its decimal digits, before truncation.
pub(crate) fn render_number(value: f64, mask: &str) -> Result<String> {
    let invalid = || {
        tracing::debug!(mask, "invalid number mask");
        Error::InvalidMask(mask.to_owned())
    };

    let caps = MASK.captures(mask).ok_or_else(invalid)?;
    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let numeric = caps.get(2).map_or("", |m| m.as_str());
    let suffix = caps.get(3).map_or("", |m| m.as_str());

    let (integer_mask, decimal_mask) = match numeric.split_once(DECIMAL_POINT) {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (numeric, None),
    };
    if decimal_mask.is_some_and(|d| d.contains([GROUP_SEPARATOR, DECIMAL_POINT])) {
        return Err(invalid());
    }
    let integer_mask = IntegerMask::parse(integer_mask).ok_or_else(invalid)?;

    let negative = value < 0.0;
    let digits = value.abs().to_string();
    let (integer_digits, fraction_digits) = digits
        .split_once(DECIMAL_POINT)
        .unwrap_or((digits.as_str(), ""));
    let (integer_digits, fraction_digits) = if suffix == "%" || suffix == " %" {
        scale_percent(integer_digits, fraction_digits)
    } else {
        (integer_digits.to_owned(), fraction_digits.to_owned())
    };

    let max_fraction = decimal_mask.map_or(0, str::len);
    let min_fraction = decimal_mask
        .and_then(|d| d.rfind('0'))
        .map_or(0, |last_zero| last_zero + 1);

    let mut fraction: String = fraction_digits.chars().take(max_fraction).collect();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let integer_is_zero = integer_digits.bytes().all(|b| b == b'0');
    let mut body = if !integer_mask.required && integer_is_zero && !fraction.is_empty() {
        String::new()
    } else if integer_mask.grouped {
        group_thousands(&integer_digits)
    } else {
        integer_digits
    };
    if !fraction.is_empty() {
        body.push(DECIMAL_POINT);
        body.push_str(&fraction);
    }

    if negative && body.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        body.insert(0, '-');
    }

    Ok(format!("{prefix}{body}{suffix}"))
}

/// Checks `value` and renders it through `mask`.
pub(crate) fn format_numeric<N: Numeric + ?Sized>(value: &N, mask: &str) -> Result<String> {
    match value.to_number() {
        Some(number) if number.is_finite() => render_number(number, mask),
        _ => {
            tracing::debug!(value = %value.describe(), "refusing to format non-number");
            Err(Error::NotNumeric(value.describe()))
        }
    }
}
