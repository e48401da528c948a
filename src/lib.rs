mod catalog;
mod chart;
mod consts;
mod prelude;
mod types;

pub use catalog::{Album, AlbumDraft, Catalog, CatalogError, SortKey};
pub use chart::{BAND_PADDING, BAR_FILL, Bar, Margin, price_bars};
pub use consts::*;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar date parsed from the day-first `DD/MM/YYYY` wire format.
/// Every constructor validates against the real calendar, so a value of
/// this type never names a day that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct DayFirstDate {
    // Field order carries the chronological significance used by the
    // derived ordering.
    year: Year,
    month: Month,
    day: Day,
}

/// Reasons a candidate date string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// Input was empty or whitespace-only.
    #[display(fmt = "empty date string")]
    Empty,
    /// Input does not have the two-digit/two-digit/four-digit
    /// slash-separated shape.
    #[display(fmt = "malformed date string: {_0:?} (expected DD/MM/YYYY)")]
    InvalidFormat(String),
    #[display(fmt = "year {} is outside 1-{}", "_0", MAX_YEAR)]
    YearOutOfRange(u16),
    #[display(fmt = "month {} is outside 1-{}", "_0", MONTHS_PER_YEAR)]
    MonthOutOfRange(u8),
    /// The day does not exist in that month of that year.
    #[display(fmt = "day {day} does not exist in {month:02}/{year:04}")]
    DayOutOfRange { day: u8, month: u8, year: u16 },
}

impl std::error::Error for ParseError {}

impl DayFirstDate {
    /// Builds a date from integer components, validating each against
    /// the calendar.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of
    /// range.
    pub fn from_parts(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(year.get(), month.get(), day)?;
        Ok(Self { year, month, day })
    }

    /// Returns the components as a `(year, month, day)` tuple.
    pub const fn to_parts(self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Returns the year as u16
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month as u8
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month as u8
    pub const fn day(self) -> u8 {
        self.day.get()
    }
}

impl FromStr for DayFirstDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        // Exactly three fields; a stray separator is malformed, not a
        // shorter date.
        let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).collect();
        let &[day_field, month_field, year_field] = fields.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let day_u8 = Self::parse_fixed_u8(day_field, DAY_WIDTH)?;
        let month_u8 = Self::parse_fixed_u8(month_field, MONTH_WIDTH)?;
        let year_u16 = Self::parse_fixed_u16(year_field, YEAR_WIDTH)?;

        let year = Year::new(year_u16)?;
        let month = Month::new(month_u8)?;
        let day = Day::new(year_u16, month_u8, day_u8)?;

        Ok(Self { year, month, day })
    }
}

impl DayFirstDate {
    /// A field is exactly `width` ASCII digits; signs, interior
    /// whitespace, and non-ASCII digits are all malformed.
    fn parse_fixed_u8(field: &str, width: usize) -> Result<u8, ParseError> {
        if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(field.to_owned()));
        }
        field
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(field.to_owned()))
    }

    fn parse_fixed_u16(field: &str, width: usize) -> Result<u16, ParseError> {
        if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(field.to_owned()));
        }
        field
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(field.to_owned()))
    }
}

/// Validates a candidate day-first date string.
///
/// Accepts anything convertible to an optional string slice, so both
/// `validate_date("25/12/2023")` and `validate_date(None)` compile.
/// Every rejection (absent input, empty string, malformed shape,
/// impossible calendar date) collapses to `None`; this function never
/// panics. Callers that need to know why a string was rejected parse it
/// with [`str::parse`] instead and inspect the [`ParseError`].
pub fn validate_date<'a>(input: impl Into<Option<&'a str>>) -> Option<DayFirstDate> {
    let candidate = input.into()?;
    candidate.parse().ok()
}

/// True exactly when [`validate_date`] accepts the input.
pub fn is_valid_date_format<'a>(input: impl Into<Option<&'a str>>) -> bool {
    validate_date(input).is_some()
}

impl TryFrom<(u16, u8, u8)> for DayFirstDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1, value.2)
    }
}

impl serde::Serialize for DayFirstDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DayFirstDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
