//! Per-month aggregation of daily bars.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::types::{DailyBar, parse_trade_date};

/// Month display names, January first: (full name, three-letter abbreviation).
const MONTH_NAMES: [(&str, &str); 12] = [
    ("January", "Jan"),
    ("February", "Feb"),
    ("March", "Mar"),
    ("April", "Apr"),
    ("May", "May"),
    ("June", "Jun"),
    ("July", "Jul"),
    ("August", "Aug"),
    ("September", "Sep"),
    ("October", "Oct"),
    ("November", "Nov"),
    ("December", "Dec"),
];

/// Full display name of a 1-based month number.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    MONTH_NAMES.get(index).map(|(full, _)| *full)
}

/// Three-letter abbreviation of a 1-based month number.
#[must_use]
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    MONTH_NAMES.get(index).map(|(_, abbrev)| *abbrev)
}

/// Canonical position of a month display name (Jan = 0 ... Dec = 11).
///
/// Accepts full names and three-letter abbreviations, case-insensitively.
/// Use this as the sort key whenever only month names are available for
/// display; lexical ordering would put "Aug" before "Jan".
#[must_use]
pub fn month_position(name: &str) -> Option<usize> {
    MONTH_NAMES.iter().position(|(full, abbrev)| {
        name.eq_ignore_ascii_case(full) || name.eq_ignore_ascii_case(abbrev)
    })
}

/// Aggregated figures for one calendar month of one period.
///
/// Computed fresh on every aggregation call and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyAggregate {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Label of the period this aggregate was derived from.
    pub period_label: String,
    /// Sum of daily volumes.
    pub total_volume: u64,
    /// Sum of `resolved_price() * volume` over the month's bars.
    pub total_dollar_volume: f64,
    /// Simple mean of resolved daily prices (not volume-weighted).
    pub average_price: f64,
}

impl MonthlyAggregate {
    /// Full display name of the aggregate's month.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or("Unknown")
    }
}

#[derive(Default)]
struct MonthAccumulator {
    total_volume: u64,
    total_dollar_volume: f64,
    price_sum: f64,
    bar_count: u32,
}

/// Aggregates a bar series into per-month figures, ascending by (year, month).
///
/// For each bar the resolved price accumulates volume, dollar volume and the
/// inputs of the simple-mean average price. Bars with malformed dates are
/// excluded with a warning, the same policy the alignment operations apply.
#[must_use]
pub fn aggregate_by_month(series: &[DailyBar], period_label: &str) -> Vec<MonthlyAggregate> {
    let mut months: BTreeMap<(i32, u32), MonthAccumulator> = BTreeMap::new();

    for bar in series {
        let Some(date) = parse_trade_date(bar) else {
            continue;
        };
        let price = bar.resolved_price();
        let acc = months.entry((date.year(), date.month())).or_default();
        acc.total_volume += bar.volume;
        acc.total_dollar_volume += price * bar.volume as f64;
        acc.price_sum += price;
        acc.bar_count += 1;
    }

    months
        .into_iter()
        .map(|((year, month), acc)| MonthlyAggregate {
            year,
            month,
            period_label: period_label.to_string(),
            total_volume: acc.total_volume,
            total_dollar_volume: acc.total_dollar_volume,
            average_price: if acc.bar_count == 0 {
                0.0
            } else {
                acc.price_sum / f64::from(acc.bar_count)
            },
        })
        .collect()
}

/// One bar-chart row of the merged monthly dollar-volume view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DollarVolumeRow {
    /// Calendar year of the row.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// First period's dollar volume, zero when it has no bars that month.
    pub dollar_volume_a: f64,
    /// Second period's dollar volume, zero when it has no bars that month.
    pub dollar_volume_b: f64,
}

impl DollarVolumeRow {
    /// Month display abbreviation for the chart axis ("Mar").
    #[must_use]
    pub fn label(&self) -> &'static str {
        month_abbrev(self.month).unwrap_or("???")
    }
}

/// Merges two periods' monthly aggregates into bar-chart rows.
///
/// Rows cover the union of (year, month) keys across both inputs, ascending
/// chronologically, with an absent side contributing zero dollar volume.
#[must_use]
pub fn merge_dollar_volume(
    months_a: &[MonthlyAggregate],
    months_b: &[MonthlyAggregate],
) -> Vec<DollarVolumeRow> {
    let mut merged: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();

    for aggregate in months_a {
        merged.entry((aggregate.year, aggregate.month)).or_default().0 +=
            aggregate.total_dollar_volume;
    }
    for aggregate in months_b {
        merged.entry((aggregate.year, aggregate.month)).or_default().1 +=
            aggregate.total_dollar_volume;
    }

    merged
        .into_iter()
        .map(|((year, month), (dollar_volume_a, dollar_volume_b))| DollarVolumeRow {
            year,
            month,
            dollar_volume_a,
            dollar_volume_b,
        })
        .collect()
}
