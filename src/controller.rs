//! The authoritative picker state: selected month, date boundary, and
//! the display ranges derived from them.

use crate::display::{MonthNameProvider, resolve_short_months};
use crate::{CalendarMonth, DECEMBER, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, JANUARY};
use chrono::{Datelike, Local, NaiveDate};

/// The values both spinners may show, recomputed from the controller
/// state after every change. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRange {
    /// Lowest selectable month index
    pub min_month: u8,
    /// Highest selectable month index
    pub max_month: u8,
    /// Whether the month wheel may wrap across the December/January seam
    pub wrap_months: bool,
    /// Short names for exactly the months in `min_month..=max_month`
    pub month_labels: Vec<String>,
    /// Lowest selectable year
    pub min_year: i32,
    /// Highest selectable year
    pub max_year: i32,
}

/// Owns the selected (year, month) pair and the `[min, max]` boundary;
/// performs all clamping and wraparound arithmetic. No UI dependency.
///
/// Boundaries are kept at day precision because interactive boundary
/// updates are vetted against the stored day-of-year; everything else
/// (clamping, display-range derivation) compares month-precision views.
#[derive(Debug)]
pub struct DateRangeController {
    current: CalendarMonth,
    min_date: NaiveDate,
    max_date: NaiveDate,
    short_months: [String; 12],
}

fn default_min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(DEFAULT_MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn default_max_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(DEFAULT_MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX)
}

impl DateRangeController {
    /// Creates a controller with the default boundary (1900-01-01
    /// through 2100-12-31) and the current local month selected.
    pub fn new(names: &dyn MonthNameProvider) -> Self {
        Self::with_bounds(names, None, None)
    }

    /// Creates a controller with explicit boundary instants, falling back
    /// to the defaults where `None`. Construction-supplied bounds are
    /// assigned directly; the update checks in [`Self::set_min_date`] and
    /// [`Self::set_max_date`] only guard later interactive changes.
    pub fn with_bounds(
        names: &dyn MonthNameProvider,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Self {
        let min_date = min_date.unwrap_or_else(default_min_date);
        let max_date = max_date.unwrap_or_else(default_max_date);
        let mut controller = Self {
            current: CalendarMonth::from(Local::now().date_naive()),
            min_date,
            max_date,
            short_months: resolve_short_months(names),
        };
        controller.current = controller.current.clamp_to(controller.min(), controller.max());
        controller
    }

    /// Sets the selection, clamped into `[min, max]`. Out-of-range input
    /// is absorbed by the clamp rather than rejected.
    pub fn initialize(&mut self, target: CalendarMonth) {
        self.current = target.clamp_to(self.min(), self.max());
    }

    /// Moves the lower boundary. The update is ignored when it only
    /// shifts the day-of-year within the boundary's current year, or when
    /// it would put the minimum past the maximum; otherwise the selection
    /// is pulled up to the new minimum if it fell below.
    pub fn set_min_date(&mut self, candidate: NaiveDate) {
        if candidate.year() == self.min_date.year()
            && candidate.ordinal() != self.min_date.ordinal()
        {
            log::debug!(
                "ignoring min date {candidate}: day-only shift within year {}",
                candidate.year()
            );
            return;
        }
        if candidate > self.max_date {
            log::debug!(
                "ignoring min date {candidate}: after max date {}",
                self.max_date
            );
            return;
        }
        self.min_date = candidate;
        let min = self.min();
        if self.current < min {
            self.current = min;
        }
    }

    /// Moves the upper boundary; mirror of [`Self::set_min_date`].
    pub fn set_max_date(&mut self, candidate: NaiveDate) {
        if candidate.year() == self.max_date.year()
            && candidate.ordinal() != self.max_date.ordinal()
        {
            log::debug!(
                "ignoring max date {candidate}: day-only shift within year {}",
                candidate.year()
            );
            return;
        }
        if candidate < self.min_date {
            log::debug!(
                "ignoring max date {candidate}: before min date {}",
                self.min_date
            );
            return;
        }
        self.max_date = candidate;
        let max = self.max();
        if self.current > max {
            self.current = max;
        }
    }

    /// Applies a month-spinner move given the displayed values before and
    /// after the scroll. A move across the December/January seam is one
    /// month with a year carry, not eleven in the opposite direction;
    /// every other move is the plain difference. The result is clamped.
    pub fn apply_month_delta(&mut self, old_value: i32, new_value: i32) {
        let delta = if old_value == i32::from(DECEMBER) && new_value == i32::from(JANUARY) {
            1
        } else if old_value == i32::from(JANUARY) && new_value == i32::from(DECEMBER) {
            -1
        } else {
            new_value - old_value
        };
        self.current = self
            .current
            .plus_months(delta)
            .clamp_to(self.min(), self.max());
    }

    /// Moves the year spinner; no wraparound concept applies. The result
    /// is clamped.
    pub fn set_year(&mut self, new_year: i32) {
        self.current = self
            .current
            .with_year(new_year)
            .clamp_to(self.min(), self.max());
    }

    /// Derives the valid display state for both spinners. The month range
    /// narrows to the remaining months of a boundary year only when the
    /// selection sits exactly on that boundary; the year range never
    /// narrows.
    pub fn display_range(&self) -> DisplayRange {
        let at_min = self.current == self.min();
        let at_max = self.current == self.max();
        let (min_month, max_month, wrap_months) = match (at_min, at_max) {
            (true, true) => (self.current.month(), self.current.month(), false),
            (true, false) => (self.current.month(), DECEMBER, false),
            (false, true) => (JANUARY, self.current.month(), false),
            (false, false) => (JANUARY, DECEMBER, true),
        };
        let month_labels =
            self.short_months[usize::from(min_month)..=usize::from(max_month)].to_vec();
        DisplayRange {
            min_month,
            max_month,
            wrap_months,
            month_labels,
            min_year: self.min().year(),
            max_year: self.max().year(),
        }
    }

    /// Returns the current selection
    pub const fn current(&self) -> CalendarMonth {
        self.current
    }

    /// Month-precision view of the lower boundary
    pub fn min(&self) -> CalendarMonth {
        CalendarMonth::from(self.min_date)
    }

    /// Month-precision view of the upper boundary
    pub fn max(&self) -> CalendarMonth {
        CalendarMonth::from(self.max_date)
    }

    /// Returns the selected year
    pub const fn year(&self) -> i32 {
        self.current.year()
    }

    /// Returns the selected zero-based month index
    pub const fn month(&self) -> u8 {
        self.current.month()
    }
}
