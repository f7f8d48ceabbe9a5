//! Construction parameters for a picker surface.

use crate::CalendarMonth;
use chrono::NaiveDate;

/// Everything a host supplies to open a picker: the initial selection
/// and optional boundary instants. Omitted boundaries fall back to the
/// controller defaults; no sentinel values are involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    /// Selection the picker comes up on
    pub initial: CalendarMonth,
    /// Inclusive lower boundary, if any
    pub min_date: Option<NaiveDate>,
    /// Inclusive upper boundary, if any
    pub max_date: Option<NaiveDate>,
}

/// Rejected picker configuration. Raised at construction time only;
/// interactive edits are clamped, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Initial selection falls before the supplied minimum date.
    #[error("initial selection {initial} is before the minimum date {min}")]
    InitialBeforeMin {
        initial: CalendarMonth,
        min: NaiveDate,
    },

    /// Initial selection falls after the supplied maximum date.
    #[error("initial selection {initial} is after the maximum date {max}")]
    InitialAfterMax {
        initial: CalendarMonth,
        max: NaiveDate,
    },
}

impl PickerConfig {
    /// Configuration with default boundaries
    pub const fn new(initial: CalendarMonth) -> Self {
        Self {
            initial,
            min_date: None,
            max_date: None,
        }
    }

    /// Sets the inclusive lower boundary
    #[must_use]
    pub const fn with_min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    /// Sets the inclusive upper boundary
    #[must_use]
    pub const fn with_max_date(mut self, max_date: NaiveDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    /// Checks the construction precondition `min <= initial <= max`,
    /// compared at month precision.
    ///
    /// # Errors
    /// Returns `ConfigError` when the initial selection falls outside a
    /// supplied boundary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(min) = self.min_date {
            if CalendarMonth::from(min) > self.initial {
                return Err(ConfigError::InitialBeforeMin {
                    initial: self.initial,
                    min,
                });
            }
        }
        if let Some(max) = self.max_date {
            if CalendarMonth::from(max) < self.initial {
                return Err(ConfigError::InitialAfterMax {
                    initial: self.initial,
                    max,
                });
            }
        }
        Ok(())
    }
}
