/// Maximum valid month (December)
pub const MAX_MONTH: i32 = 12;

/// Maximum valid hour on a 24-hour clock
pub const MAX_HOUR: i32 = 23;
/// Maximum valid minute
pub const MAX_MINUTE: i32 = 59;
/// Maximum valid second
pub const MAX_SECOND: i32 = 59;

/// Month substituted when a value carries none
pub const DEFAULT_MONTH: i32 = 1;
/// Day substituted when a value carries none
pub const DEFAULT_DAY: i32 = 1;
/// Hour, minute and second substituted when a value carries none
pub const DEFAULT_CLOCK: i32 = 0;

/// Numeric `yyyyMMdd` keys below this are validated by calendar rollover,
/// keys at or above it by the Gregorian pattern.
pub const PATTERN_VALIDATION_FLOOR: i64 = 16_000_101;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate date component separator
pub const SLASH_SEPARATOR: char = '/';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separates the date and time halves of a combined string
pub const DATETIME_SEPARATOR: char = ' ';

/// Width of an undelimited `yyyyMMdd` date
pub const COMPACT_DATE_LEN: usize = 8;
/// Width of an undelimited `hhmmss` time
pub const COMPACT_TIME_LEN: usize = 6;

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Highest code unit costed as a single byte
pub const ONE_BYTE_MAX: u32 = 0x7F;
/// Highest code unit costed with the two-byte size
pub const TWO_BYTE_MAX: u32 = 0x7FF;
/// Highest code unit costed with the three-byte size
pub const THREE_BYTE_MAX: u32 = 0xFFFF;

/// Default cost of a code unit in `0x80..=0x7FF`
pub const DEFAULT_TWO_BYTE_SIZE: usize = 2;
/// Default cost of a code unit in `0x800..=0xFFFF`
pub const DEFAULT_THREE_BYTE_SIZE: usize = 3;
/// Default cost of a code unit above `0xFFFF`
pub const DEFAULT_FOUR_BYTE_SIZE: usize = 4;

/// Digits per thousands group
pub(crate) const GROUP_WIDTH: usize = 3;
/// Thousands separator of the fixed Western convention
pub const GROUP_SEPARATOR: char = ',';
/// Decimal point of the fixed Western convention
pub const DECIMAL_POINT: char = '.';
