//! Host-facing surface of one open picker.

use crate::CalendarMonth;
use crate::binding::{PickerBinding, SpinnerControl};
use crate::config::{ConfigError, PickerConfig};
use crate::controller::DateRangeController;
use crate::display::MonthNameProvider;

type DateSetFn = Box<dyn FnMut(i32, u8)>;

/// One open picker surface: a validated configuration, a controller
/// wired to its two spinners, and the confirmation callback. The host
/// renders the chrome and routes button presses to [`Self::confirm`] or
/// [`Self::cancel`]; this type owns everything behind them.
pub struct PickerSession<M, Y> {
    binding: PickerBinding<M, Y>,
    on_date_set: Option<DateSetFn>,
}

impl<M: SpinnerControl, Y: SpinnerControl> PickerSession<M, Y> {
    /// Validates the configuration and brings up the picker state. An
    /// initial selection outside the supplied bounds is fatal here; the
    /// picker must not be shown.
    ///
    /// # Errors
    /// Returns `ConfigError` when `config` fails its precondition.
    pub fn open(
        config: PickerConfig,
        names: &dyn MonthNameProvider,
        month_spinner: M,
        year_spinner: Y,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller =
            DateRangeController::with_bounds(names, config.min_date, config.max_date);
        controller.initialize(config.initial);
        Ok(Self {
            binding: PickerBinding::new(controller, month_spinner, year_spinner),
            on_date_set: None,
        })
    }

    /// Installs the confirmation callback fired by [`Self::confirm`].
    /// It receives `(year, zero-based month)`.
    pub fn set_on_date_set(&mut self, callback: impl FnMut(i32, u8) + 'static) {
        self.on_date_set = Some(Box::new(callback));
    }

    /// The affirmative action: reports the current selection to the
    /// confirmation callback, once per call.
    pub fn confirm(&mut self) {
        let selection = self.selection();
        if let Some(callback) = self.on_date_set.as_mut() {
            callback(selection.year(), selection.month());
        }
    }

    /// Dismisses without confirming. The controller mutates eagerly, so
    /// there is nothing to roll back; the selection is simply dropped.
    pub fn cancel(self) {
        log::debug!("picker cancelled at {}", self.selection());
    }

    /// Snapshot of the transient selection for host-side persistence
    /// across surface teardown.
    pub fn save_state(&self) -> CalendarMonth {
        self.selection()
    }

    /// Restores a snapshot taken by [`Self::save_state`]. The value goes
    /// through [`DateRangeController::initialize`], so it is clamped back
    /// into the current bounds on the way in.
    pub fn restore_state(&mut self, saved: CalendarMonth) {
        self.binding.initialize(saved);
    }

    /// The current selection
    pub fn selection(&self) -> CalendarMonth {
        self.binding.controller().current()
    }

    /// Read access to the binding
    pub const fn binding(&self) -> &PickerBinding<M, Y> {
        &self.binding
    }

    /// Mutable access to the binding, for routing live control events
    pub const fn binding_mut(&mut self) -> &mut PickerBinding<M, Y> {
        &mut self.binding
    }
}
