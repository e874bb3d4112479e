//! Comparison period definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named comparison window with inclusive calendar-date bounds.
///
/// Two periods are compared at a time. No ordering constraint holds between
/// them: overlapping or reversed windows are accepted without error, though
/// callers typically choose non-overlapping ranges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Display label, e.g. `"Period 1"` or `"Jan-May 2023"`.
    pub label: String,
    /// First calendar day of the window (inclusive).
    pub start: NaiveDate,
    /// Last calendar day of the window (inclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Creates a period with a display label and inclusive bounds.
    #[must_use]
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Returns true when `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Which side of a two-period comparison a series belongs to.
///
/// The slot selects the default display label and the built-in fallback
/// dataset substituted when that side's fetch degrades.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodSlot {
    /// The first (baseline) comparison window.
    First,
    /// The second comparison window.
    Second,
}

impl PeriodSlot {
    /// Default display label for the slot.
    #[must_use]
    pub const fn default_label(&self) -> &'static str {
        match self {
            Self::First => "Period 1",
            Self::Second => "Period 2",
        }
    }
}
