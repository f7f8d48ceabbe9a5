//! Shared helpers for unit tests.

use crate::CalendarMonth;
use crate::binding::SpinnerControl;
use crate::display::MonthNameProvider;
use chrono::NaiveDate;

pub fn cm(year: i32, month: u8) -> CalendarMonth {
    CalendarMonth::new(year, month).expect("valid test month")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Provider for a locale that writes months as digits.
pub struct NumericJanuaryNames;

impl MonthNameProvider for NumericJanuaryNames {
    fn short_months(&self) -> [String; 12] {
        std::array::from_fn(|i| (i + 1).to_string())
    }
}

/// Records everything the binding pushes at it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MockSpinner {
    pub min: i32,
    pub max: i32,
    pub wrap: bool,
    pub labels: Option<Vec<String>>,
    pub value: i32,
}

impl SpinnerControl for MockSpinner {
    fn set_range(&mut self, min: i32, max: i32) {
        self.min = min;
        self.max = max;
    }

    fn set_wrap_wheel(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    fn set_displayed_values(&mut self, labels: Option<&[String]>) {
        self.labels = labels.map(<[String]>::to_vec);
    }

    fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    fn value(&self) -> i32 {
        self.value
    }
}
