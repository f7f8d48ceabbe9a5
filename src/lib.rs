//! Selection logic for a linked month/year spinner picker.
//!
//! The crate owns everything behind the widgets: the selected
//! [`CalendarMonth`], a `[min, max]` date boundary with clamping and
//! December/January wraparound, and the derived display ranges the two
//! spinners are allowed to show. Rendering, dialog chrome, and the event
//! loop stay with the host, which reaches in through [`SpinnerControl`]
//! and the callbacks on [`PickerBinding`] and [`PickerSession`].

mod binding;
mod config;
mod consts;
mod controller;
mod display;
mod prelude;
mod session;
mod types;

#[cfg(test)]
mod test_utils;

pub use binding::{PickerBinding, SpinnerControl};
pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use controller::{DateRangeController, DisplayRange};
pub use display::{EnglishMonthNames, MonthNameProvider};
pub use session::PickerSession;
pub use types::MonthOfYear;

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A year and month pair with no day-of-month component, ordered
/// lexicographically by (year, month). The value the picker selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:04}", "month.number()", "year")]
pub struct CalendarMonth {
    year: i32,
    month: MonthOfYear,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", DECEMBER)]
    InvalidMonth(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarMonth {
    /// Creates a new `CalendarMonth` from a year and zero-based month index
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is > `DECEMBER`.
    pub fn new(year: i32, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year,
            month: MonthOfYear::new(month)?,
        })
    }

    /// Creates a new `CalendarMonth` from an already validated month
    pub const fn of(year: i32, month: MonthOfYear) -> Self {
        Self { year, month }
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the zero-based month index
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.index()
    }

    /// Returns the typed month component
    #[inline]
    pub const fn month_typed(self) -> MonthOfYear {
        self.month
    }

    /// Position on a single month axis; the basis for delta arithmetic.
    fn total_months(self) -> i64 {
        i64::from(self.year) * i64::from(MONTHS_PER_YEAR) + i64::from(self.month.index())
    }

    /// Moves by `delta` calendar months, carrying into the year in either
    /// direction. December plus one month is January of the next year.
    pub fn plus_months(self, delta: i32) -> Self {
        let months = i64::from(MONTHS_PER_YEAR);
        let total = self.total_months() + i64::from(delta);
        let year = total
            .div_euclid(months)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let month = total.rem_euclid(months) as u8;
        Self {
            year,
            month: MonthOfYear::from_index(month),
        }
    }

    /// Replaces the year, keeping the month
    pub const fn with_year(self, year: i32) -> Self {
        Self {
            year,
            month: self.month,
        }
    }

    /// Snaps the value into `[min, max]`: values outside come back as the
    /// violated boundary, values inside come back unchanged.
    pub fn clamp_to(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// First day of this month as a concrete date. `None` only when the
    /// year is outside what [`NaiveDate`] can represent.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month.number()), 1)
    }
}

impl From<NaiveDate> for CalendarMonth {
    /// Month-precision view of a full date; the day is dropped.
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: MonthOfYear::from_index(date.month0() as u8),
        }
    }
}

impl FromStr for CalendarMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_slash = trimmed.contains(MONTH_YEAR_SEPARATOR);
        let has_hyphen = trimmed.contains(ISO_SEPARATOR);

        if has_slash && has_hyphen {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({MONTH_YEAR_SEPARATOR} and {ISO_SEPARATOR})"
            )));
        }

        let (month_str, year_str) = if has_slash {
            // Month-first format: MM/yyyy
            let parts: Vec<&str> = trimmed.split(MONTH_YEAR_SEPARATOR).map(str::trim).collect();
            match parts[..] {
                [month, year] => (month, year),
                _ => return Err(ParseError::InvalidFormat(trimmed.to_owned())),
            }
        } else if has_hyphen {
            // ISO format: yyyy-MM
            let parts: Vec<&str> = trimmed.split(ISO_SEPARATOR).map(str::trim).collect();
            match parts[..] {
                [year, month] => (month, year),
                _ => return Err(ParseError::InvalidFormat(trimmed.to_owned())),
            }
        } else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let number = month_str
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(month_str.to_owned()))?;
        let year = year_str
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(year_str.to_owned()))?;

        // Both text forms carry one-based month numbers
        if !(1..=MONTHS_PER_YEAR).contains(&number) {
            return Err(ParseError::InvalidFormat(format!(
                "Month {number} out of range in {trimmed}"
            )));
        }
        Self::new(year, number - 1)
    }
}

impl serde::Serialize for CalendarMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::cm;

    #[test]
    fn test_new_valid() {
        let value = CalendarMonth::new(2020, 5).unwrap();
        assert_eq!(value.year(), 2020);
        assert_eq!(value.month(), 5);
    }

    #[test]
    fn test_new_invalid_month() {
        let result = CalendarMonth::new(2020, 12);
        assert!(matches!(result, Err(ParseError::InvalidMonth(12))));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(cm(2019, 11) < cm(2020, 0));
        assert!(cm(2020, 0) < cm(2020, 1));
        assert!(cm(2021, 0) > cm(2020, 11));
        assert_eq!(cm(2020, 5), cm(2020, 5));
    }

    #[test]
    fn test_plus_months_cases() {
        struct TestCase {
            start: (i32, u8),
            delta: i32,
            expected: (i32, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start: (2020, 5),
                delta: 0,
                expected: (2020, 5),
                description: "zero delta",
            },
            TestCase {
                start: (2020, 5),
                delta: 2,
                expected: (2020, 7),
                description: "within the year",
            },
            TestCase {
                start: (2020, 11),
                delta: 1,
                expected: (2021, 0),
                description: "December into January",
            },
            TestCase {
                start: (2020, 0),
                delta: -1,
                expected: (2019, 11),
                description: "January back into December",
            },
            TestCase {
                start: (2020, 5),
                delta: 13,
                expected: (2021, 6),
                description: "more than a year forward",
            },
            TestCase {
                start: (2020, 5),
                delta: -25,
                expected: (2018, 4),
                description: "more than two years back",
            },
        ];

        for case in &cases {
            let (year, month) = case.start;
            let result = cm(year, month).plus_months(case.delta);
            let (expected_year, expected_month) = case.expected;
            assert_eq!(
                result,
                cm(expected_year, expected_month),
                "{}: {}-{} + {}",
                case.description,
                year,
                month,
                case.delta
            );
        }
    }

    #[test]
    fn test_with_year() {
        let moved = cm(2020, 5).with_year(1999);
        assert_eq!(moved, cm(1999, 5));
    }

    #[test]
    fn test_clamp_to() {
        let min = cm(2010, 3);
        let max = cm(2030, 8);

        assert_eq!(cm(2005, 7).clamp_to(min, max), min);
        assert_eq!(cm(2031, 0).clamp_to(min, max), max);
        assert_eq!(cm(2020, 5).clamp_to(min, max), cm(2020, 5));
        assert_eq!(min.clamp_to(min, max), min);
        assert_eq!(max.clamp_to(min, max), max);
    }

    #[test]
    fn test_first_day() {
        let date = cm(2020, 5).first_day().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 6, 1));
    }

    #[test]
    fn test_from_naive_date_drops_day() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 23).unwrap();
        assert_eq!(CalendarMonth::from(date), cm(2020, 5));
    }

    #[test]
    fn test_display() {
        // One-based zero-padded month, the MM/yyyy convention
        assert_eq!(cm(2020, 5).to_string(), "06/2020");
        assert_eq!(cm(1900, 0).to_string(), "01/1900");
        assert_eq!(cm(2100, 11).to_string(), "12/2100");
    }

    #[test]
    fn test_parse_month_first() {
        let value = "06/2020".parse::<CalendarMonth>().unwrap();
        assert_eq!(value, cm(2020, 5));
    }

    #[test]
    fn test_parse_iso() {
        let value = "2020-06".parse::<CalendarMonth>().unwrap();
        assert_eq!(value, cm(2020, 5));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let value = " 06 / 2020 ".parse::<CalendarMonth>().unwrap();
        assert_eq!(value, cm(2020, 5));
    }

    #[test]
    fn test_parse_rejects_month_zero_and_thirteen() {
        assert!("00/2020".parse::<CalendarMonth>().is_err());
        assert!("13/2020".parse::<CalendarMonth>().is_err());
        assert!("2020-00".parse::<CalendarMonth>().is_err());
        assert!("2020-13".parse::<CalendarMonth>().is_err());
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        let result = "XX/2020".parse::<CalendarMonth>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "06/20X0".parse::<CalendarMonth>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "".parse::<CalendarMonth>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));

        let result = "2020".parse::<CalendarMonth>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_mixed_delimiters() {
        let result = "2020-06/15".parse::<CalendarMonth>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_too_many_separators() {
        assert!("06/15/2020".parse::<CalendarMonth>().is_err());
        assert!("2020-06-15".parse::<CalendarMonth>().is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let value = cm(2020, 5);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""06/2020""#);

        let parsed: CalendarMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(value, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<CalendarMonth, _> = serde_json::from_str(r#""13/2020""#);
        assert!(result.is_err());

        let result: Result<CalendarMonth, _> = serde_json::from_str(r#""junk""#);
        assert!(result.is_err());
    }
}
