use crate::ParseError;
use crate::consts::DECEMBER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A month-of-year value guaranteed to be in the range `0..=11`,
/// zero-based to match the indexing of the month spinner (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthOfYear(u8);

impl MonthOfYear {
    /// Creates a new `MonthOfYear`, validating that it's <= `DECEMBER`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is > `DECEMBER`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > DECEMBER {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(value))
    }

    /// Returns the zero-based index, as shown by the month spinner
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the one-based month number, as used in `MM/yyyy` formatting
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Wraps a value already known to be a valid index, e.g. the result
    /// of a `rem_euclid(12)`.
    pub(crate) const fn from_index(value: u8) -> Self {
        debug_assert!(value <= DECEMBER);
        Self(value)
    }
}

impl TryFrom<u8> for MonthOfYear {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthOfYear> for u8 {
    fn from(month: MonthOfYear) -> Self {
        month.0
    }
}

impl fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
