/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February in a common year
pub const FEBRUARY_DAYS_COMMON: u8 = 28;
/// Days in February in a leap year
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Exact digit count of the day field in the wire format
pub const DAY_WIDTH: usize = 2;
/// Exact digit count of the month field in the wire format
pub const MONTH_WIDTH: usize = 2;
/// Exact digit count of the year field in the wire format
pub const YEAR_WIDTH: usize = 4;

/// Separator between the day, month, and year fields
pub const FIELD_SEPARATOR: char = '/';
