//! Alignment of two bar series on shared axes.
//!
//! Two alignments exist:
//!
//! - [`merge_by_date`] - one row per distinct calendar date in either series,
//!   for plotting both periods on a real date axis.
//! - [`align_month_day`] - one row per distinct (month, day) key with the
//!   year discarded, for comparing periods that span different years on a
//!   single year-agnostic axis.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::monthly::month_abbrev;
use crate::types::{DailyBar, parse_trade_date};

/// One merged point of the per-date volume series.
///
/// `None` on either side means that series had no bar for the date ("no
/// trading"), which renderers must not conflate with a bar reporting zero
/// volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DailyVolumePoint {
    /// Calendar date of the point.
    pub date: NaiveDate,
    /// First series' volume, if it has a bar for this date.
    pub volume_a: Option<u64>,
    /// Second series' volume, if it has a bar for this date.
    pub volume_b: Option<u64>,
}

/// Whether zero-volume bars participate in month/day alignment.
///
/// Some upstream datasets carry placeholder rows for non-trading days
/// (weekends, holidays) with a volume of zero. Excluding them keeps the
/// aligned axis to days on which at least one period actually traded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroVolumePolicy {
    /// Keep zero-volume bars in the alignment.
    #[default]
    Keep,
    /// Exclude zero-volume bars before aligning.
    DropZeroVolumeDays,
}

/// Year-agnostic series produced by [`align_month_day`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlignedSeries {
    /// Display label of the first period.
    pub label_a: String,
    /// Display label of the second period.
    pub label_b: String,
    /// Rows sorted by (month, day).
    pub points: Vec<MonthDayPoint>,
}

/// One row of a month/day aligned series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonthDayPoint {
    /// Month component, 1-12.
    pub month: u32,
    /// Day-of-month component, 1-31.
    pub day: u32,
    /// First period's volume for this month/day, zero when it did not trade.
    pub volume_a: u64,
    /// Second period's volume for this month/day, zero when it did not trade.
    pub volume_b: u64,
}

impl MonthDayPoint {
    /// Axis label in `Jan-05` form.
    #[must_use]
    pub fn axis_label(&self) -> String {
        format!("{}-{:02}", month_abbrev(self.month).unwrap_or("???"), self.day)
    }
}

/// Merges two series into one ordered per-date volume sequence.
///
/// The output holds one point per distinct date present in either input,
/// ascending by calendar date, regardless of input order. A date present in
/// only one series leaves the other side `None`. Bars with malformed dates
/// are dropped with a warning, not substituted with a default. A duplicate
/// date within one series replaces the earlier bar.
#[must_use]
pub fn merge_by_date(series_a: &[DailyBar], series_b: &[DailyBar]) -> Vec<DailyVolumePoint> {
    let mut merged: BTreeMap<NaiveDate, (Option<u64>, Option<u64>)> = BTreeMap::new();

    for bar in series_a {
        let Some(date) = parse_trade_date(bar) else {
            continue;
        };
        merged.entry(date).or_default().0 = Some(bar.volume);
    }
    for bar in series_b {
        let Some(date) = parse_trade_date(bar) else {
            continue;
        };
        merged.entry(date).or_default().1 = Some(bar.volume);
    }

    merged
        .into_iter()
        .map(|(date, (volume_a, volume_b))| DailyVolumePoint {
            date,
            volume_a,
            volume_b,
        })
        .collect()
}

/// Aligns two series on a shared, year-agnostic (month, day) axis.
///
/// Every bar is re-keyed by (month, day-of-month), discarding the year, so
/// periods spanning different calendar years share one axis. Keys present in
/// both inputs merge into a single row; keys present in only one input get a
/// row with the other side defaulted to zero. Rows are sorted by (month
/// ascending, day ascending), not by original full date. A month/day key
/// repeated within one series (a period longer than a year) accumulates by
/// summation. Bars with malformed dates are dropped with a warning.
#[must_use]
pub fn align_month_day(
    series_a: &[DailyBar],
    series_b: &[DailyBar],
    label_a: impl Into<String>,
    label_b: impl Into<String>,
    policy: ZeroVolumePolicy,
) -> AlignedSeries {
    let mut merged: BTreeMap<(u32, u32), (u64, u64)> = BTreeMap::new();

    let keep = |bar: &DailyBar| policy == ZeroVolumePolicy::Keep || bar.volume > 0;

    for bar in series_a.iter().filter(|bar| keep(bar)) {
        let Some(date) = parse_trade_date(bar) else {
            continue;
        };
        merged.entry((date.month(), date.day())).or_default().0 += bar.volume;
    }
    for bar in series_b.iter().filter(|bar| keep(bar)) {
        let Some(date) = parse_trade_date(bar) else {
            continue;
        };
        merged.entry((date.month(), date.day())).or_default().1 += bar.volume;
    }

    AlignedSeries {
        label_a: label_a.into(),
        label_b: label_b.into(),
        points: merged
            .into_iter()
            .map(|((month, day), (volume_a, volume_b))| MonthDayPoint {
                month,
                day,
                volume_a,
                volume_b,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, volume: u64) -> DailyBar {
        DailyBar::new(date, 10.0, volume)
    }

    #[test]
    fn test_merge_by_date_unions_and_orders() {
        // Deliberately unsorted input.
        let a = vec![bar("2023-02-05", 200), bar("2023-01-05", 100)];
        let b = vec![bar("2023-01-05", 150), bar("2023-03-05", 300)];

        let merged = merge_by_date(&a, &b);
        assert_eq!(merged.len(), 3);

        assert_eq!(merged[0].date.to_string(), "2023-01-05");
        assert_eq!(merged[0].volume_a, Some(100));
        assert_eq!(merged[0].volume_b, Some(150));

        assert_eq!(merged[1].date.to_string(), "2023-02-05");
        assert_eq!(merged[1].volume_a, Some(200));
        assert_eq!(merged[1].volume_b, None);

        assert_eq!(merged[2].date.to_string(), "2023-03-05");
        assert_eq!(merged[2].volume_a, None);
        assert_eq!(merged[2].volume_b, Some(300));
    }

    #[test]
    fn test_merge_by_date_drops_malformed_dates() {
        let a = vec![bar("garbage", 999), bar("2023-01-05", 100)];
        let merged = merge_by_date(&a, &[]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].volume_a, Some(100));
    }

    #[test]
    fn test_merge_by_date_duplicate_date_last_wins() {
        let a = vec![bar("2023-01-05", 100), bar("2023-01-05", 250)];
        let merged = merge_by_date(&a, &[]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].volume_a, Some(250));
    }

    #[test]
    fn test_align_month_day_cross_year() {
        let a = vec![bar("2023-01-05", 100), bar("2023-02-05", 200)];
        let b = vec![bar("2024-01-05", 150)];

        let aligned = align_month_day(&a, &b, "2023", "2024", ZeroVolumePolicy::Keep);
        assert_eq!(aligned.label_a, "2023");
        assert_eq!(aligned.label_b, "2024");
        assert_eq!(aligned.points.len(), 2);

        assert_eq!(aligned.points[0].month, 1);
        assert_eq!(aligned.points[0].day, 5);
        assert_eq!(aligned.points[0].volume_a, 100);
        assert_eq!(aligned.points[0].volume_b, 150);

        assert_eq!(aligned.points[1].month, 2);
        assert_eq!(aligned.points[1].day, 5);
        assert_eq!(aligned.points[1].volume_a, 200);
        assert_eq!(aligned.points[1].volume_b, 0);
    }

    #[test]
    fn test_align_month_day_orders_by_month_then_day() {
        let a = vec![
            bar("2023-12-01", 1),
            bar("2023-01-15", 2),
            bar("2023-01-02", 3),
        ];
        let aligned = align_month_day(&a, &[], "a", "b", ZeroVolumePolicy::Keep);
        let keys: Vec<(u32, u32)> = aligned.points.iter().map(|p| (p.month, p.day)).collect();
        assert_eq!(keys, vec![(1, 2), (1, 15), (12, 1)]);
    }

    #[test]
    fn test_align_month_day_key_appears_once() {
        let a = vec![bar("2023-01-05", 100), bar("2023-06-05", 10)];
        let b = vec![bar("2024-01-05", 150), bar("2024-06-05", 20)];
        let aligned = align_month_day(&a, &b, "a", "b", ZeroVolumePolicy::Keep);

        let distinct: std::collections::BTreeSet<(u32, u32)> =
            aligned.points.iter().map(|p| (p.month, p.day)).collect();
        assert_eq!(distinct.len(), aligned.points.len());
        assert!(aligned.points.len() <= 4);
    }

    #[test]
    fn test_align_month_day_zero_volume_policy() {
        let a = vec![bar("2023-01-07", 0), bar("2023-01-05", 100)];
        let b = vec![bar("2024-01-07", 0)];

        let kept = align_month_day(&a, &b, "a", "b", ZeroVolumePolicy::Keep);
        assert_eq!(kept.points.len(), 2);

        let dropped = align_month_day(&a, &b, "a", "b", ZeroVolumePolicy::DropZeroVolumeDays);
        assert_eq!(dropped.points.len(), 1);
        assert_eq!(dropped.points[0].day, 5);
    }

    #[test]
    fn test_align_month_day_sums_repeated_keys_within_one_series() {
        // A period spanning two years hits the same month/day twice.
        let a = vec![bar("2022-03-01", 40), bar("2023-03-01", 60)];
        let aligned = align_month_day(&a, &[], "a", "b", ZeroVolumePolicy::Keep);
        assert_eq!(aligned.points.len(), 1);
        assert_eq!(aligned.points[0].volume_a, 100);
    }

    #[test]
    fn test_axis_label() {
        let point = MonthDayPoint {
            month: 1,
            day: 5,
            volume_a: 0,
            volume_b: 0,
        };
        assert_eq!(point.axis_label(), "Jan-05");
    }
}
