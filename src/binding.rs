//! Adapter between the controller and the two value spinners.

use crate::CalendarMonth;
use crate::controller::DateRangeController;
use chrono::NaiveDate;

/// The mutable surface of one value spinner, as the binding drives it.
/// Mirrors the classic number-picker widget contract: a `[min, max]`
/// value range, optional wheel wrap, optional custom labels, and the
/// displayed value.
pub trait SpinnerControl {
    /// Declares the selectable value range, inclusive on both ends.
    fn set_range(&mut self, min: i32, max: i32);

    /// Whether scrolling past an end re-enters from the other end.
    fn set_wrap_wheel(&mut self, wrap: bool);

    /// Labels for the range values in order; `None` clears custom labels
    /// back to plain numbers.
    fn set_displayed_values(&mut self, labels: Option<&[String]>);

    /// Moves the spinner to the given value.
    fn set_value(&mut self, value: i32);

    /// The value the spinner currently shows.
    fn value(&self) -> i32;
}

type DateChangedFn = Box<dyn FnMut(i32, u8)>;

/// Wires a month spinner and a year spinner to one
/// [`DateRangeController`]: raw control events go in as deltas, the
/// resulting display state comes back out to both controls, and a
/// listener hears about committed changes.
pub struct PickerBinding<M, Y> {
    controller: DateRangeController,
    month_spinner: M,
    year_spinner: Y,
    on_date_changed: Option<DateChangedFn>,
}

impl<M: SpinnerControl, Y: SpinnerControl> PickerBinding<M, Y> {
    /// Takes ownership of the controller and both controls, and pushes
    /// the controller's state onto them immediately.
    pub fn new(controller: DateRangeController, month_spinner: M, year_spinner: Y) -> Self {
        let mut binding = Self {
            controller,
            month_spinner,
            year_spinner,
            on_date_changed: None,
        };
        binding.refresh_controls();
        binding
    }

    /// Installs the live-change callback, replacing any previous one.
    /// It receives `(year, zero-based month)` once per committed change.
    pub fn set_on_date_changed(&mut self, callback: impl FnMut(i32, u8) + 'static) {
        self.on_date_changed = Some(Box::new(callback));
    }

    /// A month-spinner scroll from `old_value` to `new_value`.
    pub fn on_month_changed(&mut self, old_value: i32, new_value: i32) {
        let before = self.controller.current();
        self.controller.apply_month_delta(old_value, new_value);
        self.refresh_controls();
        self.notify_if_changed(before);
    }

    /// A year-spinner move to `new_value`.
    pub fn on_year_changed(&mut self, new_value: i32) {
        let before = self.controller.current();
        self.controller.set_year(new_value);
        self.refresh_controls();
        self.notify_if_changed(before);
    }

    /// Boundary update arriving from the host; the controls are refreshed
    /// so they never display a value outside their declared range.
    pub fn set_min_date(&mut self, min_date: NaiveDate) {
        self.controller.set_min_date(min_date);
        self.refresh_controls();
    }

    /// Mirror of [`Self::set_min_date`] for the upper boundary.
    pub fn set_max_date(&mut self, max_date: NaiveDate) {
        self.controller.set_max_date(max_date);
        self.refresh_controls();
    }

    /// Re-seeds the selection, e.g. when restoring saved state.
    pub fn initialize(&mut self, target: CalendarMonth) {
        self.controller.initialize(target);
        self.refresh_controls();
    }

    /// Pushes the controller's display range and current value onto both
    /// spinners. A pure function of controller state, so calling it twice
    /// in a row leaves the controls exactly as the first call did.
    pub fn refresh_controls(&mut self) {
        let range = self.controller.display_range();

        // Clear labels before narrowing the range so a shrinking spinner
        // never indexes past the label list it still holds.
        self.month_spinner.set_displayed_values(None);
        self.month_spinner
            .set_range(i32::from(range.min_month), i32::from(range.max_month));
        self.month_spinner.set_wrap_wheel(range.wrap_months);
        self.month_spinner
            .set_displayed_values(Some(&range.month_labels));

        self.year_spinner.set_range(range.min_year, range.max_year);
        self.year_spinner.set_wrap_wheel(false);

        self.year_spinner.set_value(self.controller.year());
        self.month_spinner
            .set_value(i32::from(self.controller.month()));
    }

    fn notify_if_changed(&mut self, before: CalendarMonth) {
        let current = self.controller.current();
        if current == before {
            return;
        }
        log::trace!("date changed {before} -> {current}");
        if let Some(callback) = self.on_date_changed.as_mut() {
            callback(current.year(), current.month());
        }
    }

    /// Read access to the underlying controller
    pub const fn controller(&self) -> &DateRangeController {
        &self.controller
    }

    /// Read access to the month control
    pub const fn month_spinner(&self) -> &M {
        &self.month_spinner
    }

    /// Read access to the year control
    pub const fn year_spinner(&self) -> &Y {
        &self.year_spinner
    }
}
