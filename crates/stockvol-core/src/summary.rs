//! Whole-period summaries and percentage deltas.

use serde::Serialize;
use std::fmt;

use crate::types::{DailyBar, parse_trade_date};

/// Whole-period totals for one bar series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PeriodSummary {
    /// Sum of daily volumes.
    pub total_volume: u64,
    /// Simple mean of resolved daily prices (not time- or volume-weighted).
    pub average_price: f64,
    /// Sum of `resolved_price() * volume` over the period's bars.
    pub total_dollar_volume: f64,
}

/// Summarizes a whole series.
///
/// An empty series yields the all-zero summary, not an error. Bars with
/// malformed dates are excluded with a warning so that these totals stay
/// equal to the sum of the per-month aggregates over the same series.
#[must_use]
pub fn summarize_period(series: &[DailyBar]) -> PeriodSummary {
    let mut summary = PeriodSummary::default();
    let mut price_sum = 0.0;
    let mut bar_count = 0u32;

    for bar in series {
        if parse_trade_date(bar).is_none() {
            continue;
        }
        let price = bar.resolved_price();
        summary.total_volume += bar.volume;
        summary.total_dollar_volume += price * bar.volume as f64;
        price_sum += price;
        bar_count += 1;
    }

    if bar_count > 0 {
        summary.average_price = price_sum / f64::from(bar_count);
    }
    summary
}

/// Relative change between two values, or `Undefined` on a zero baseline.
///
/// Division by zero has no meaningful financial interpretation here, so a
/// zero baseline is reported explicitly instead of propagating `NaN` or
/// infinity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum PercentChange {
    /// Percentage change `(to - from) / from * 100`.
    Change(f64),
    /// No meaningful change exists because the baseline is zero.
    Undefined,
}

impl PercentChange {
    /// Returns the percentage as a number, or `None` when undefined.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Change(pct) => Some(*pct),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Change(pct) => write!(f, "{pct:+.1}%"),
            Self::Undefined => write!(f, "n/a"),
        }
    }
}

/// Percentage change from `from` to `to`.
#[must_use]
pub fn percent_change(from: f64, to: f64) -> PercentChange {
    if from == 0.0 {
        PercentChange::Undefined
    } else {
        PercentChange::Change((to - from) / from * 100.0)
    }
}
