//! Month-name resolution for the month spinner.
//!
//! Names come from an injected provider rather than a global locale
//! lookup, so label behavior is deterministic and testable. Locales that
//! write months as digits fall back to plain one-based numbers.

/// Source of the short month names shown on the month spinner.
pub trait MonthNameProvider {
    /// Twelve short names, January first.
    fn short_months(&self) -> [String; 12];
}

const ENGLISH_SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Default provider with abbreviated English month names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMonthNames;

impl MonthNameProvider for EnglishMonthNames {
    fn short_months(&self) -> [String; 12] {
        ENGLISH_SHORT_MONTHS.map(str::to_owned)
    }
}

/// Labels the controller slices display ranges from: the provider's
/// names, or one-based numeric strings when the locale formats months
/// numerically.
pub(crate) fn resolve_short_months(names: &dyn MonthNameProvider) -> [String; 12] {
    let labels = names.short_months();
    if uses_numeric_months(&labels) {
        std::array::from_fn(|i| (i + 1).to_string())
    } else {
        labels
    }
}

/// A locale writes months numerically when its January label leads with
/// a digit.
fn uses_numeric_months(labels: &[String; 12]) -> bool {
    labels[0].chars().next().is_some_and(|c| c.is_ascii_digit())
}
