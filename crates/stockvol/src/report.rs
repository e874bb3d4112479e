//! Assembly of the full comparison report.

use serde::Serialize;
use stockvol_core::{
    AlignedSeries, DailyVolumePoint, DollarVolumeRow, MonthlyAggregate, PercentChange,
    PeriodSummary, Symbol, ZeroVolumePolicy, aggregate_by_month, align_month_day, merge_by_date,
    merge_dollar_volume, percent_change, summarize_period,
};

use crate::service::PeriodSeries;

/// Headline statistics for the dashboard's summary tiles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeadlineStats {
    /// Whole-period summary of the first period.
    pub first: PeriodSummary,
    /// Whole-period summary of the second period.
    pub second: PeriodSummary,
    /// Change of total volume from the first period to the second.
    pub volume_change: PercentChange,
    /// Largest single-day volume across both periods.
    pub peak_daily_volume: u64,
}

/// Everything a two-period dashboard renders, as plain structured data.
///
/// Recomputed fresh from the two period series on every comparison; holds no
/// state of its own and is discarded when the inputs change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    /// The symbol both periods were fetched for.
    pub symbol: Symbol,
    /// First period's tagged series.
    pub first: PeriodSeries,
    /// Second period's tagged series.
    pub second: PeriodSeries,
    /// Merged per-date volume series (line chart on a real date axis).
    pub daily_volume: Vec<DailyVolumePoint>,
    /// Month/day aligned volume series (cross-year line chart).
    pub normalized_volume: AlignedSeries,
    /// Merged monthly dollar-volume rows (bar chart).
    pub monthly_dollar_volume: Vec<DollarVolumeRow>,
    /// Per-month breakdown rows for both periods (table): the first period's
    /// months followed by the second's, each ascending by year and month.
    pub monthly_breakdown: Vec<MonthlyAggregate>,
    /// Summary tiles.
    pub stats: HeadlineStats,
}

impl Comparison {
    /// Derives every rendered payload from the two tagged series.
    pub(crate) fn assemble(
        symbol: Symbol,
        first: PeriodSeries,
        second: PeriodSeries,
        zero_volume: ZeroVolumePolicy,
    ) -> Self {
        let bars_a = first.bars();
        let bars_b = second.bars();

        let daily_volume = merge_by_date(bars_a, bars_b);
        let normalized_volume = align_month_day(
            bars_a,
            bars_b,
            first.period.label.as_str(),
            second.period.label.as_str(),
            zero_volume,
        );

        let months_a = aggregate_by_month(bars_a, &first.period.label);
        let months_b = aggregate_by_month(bars_b, &second.period.label);
        let monthly_dollar_volume = merge_dollar_volume(&months_a, &months_b);

        let summary_a = summarize_period(bars_a);
        let summary_b = summarize_period(bars_b);
        let stats = HeadlineStats {
            volume_change: percent_change(
                summary_a.total_volume as f64,
                summary_b.total_volume as f64,
            ),
            peak_daily_volume: bars_a
                .iter()
                .chain(bars_b)
                .map(|bar| bar.volume)
                .max()
                .unwrap_or(0),
            first: summary_a,
            second: summary_b,
        };

        let mut monthly_breakdown = months_a;
        monthly_breakdown.extend(months_b);

        Self {
            symbol,
            first,
            second,
            daily_volume,
            normalized_volume,
            monthly_dollar_volume,
            monthly_breakdown,
            stats,
        }
    }

    /// True when at least one period is showing sample data.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.first.source.is_fallback() || self.second.source.is_fallback()
    }

    /// Non-fatal advisory describing degraded periods, if any.
    #[must_use]
    pub fn advisory(&self) -> Option<String> {
        let notes: Vec<String> = [&self.first, &self.second]
            .into_iter()
            .filter_map(PeriodSeries::advisory)
            .collect();
        if notes.is_empty() {
            None
        } else {
            Some(notes.join(" "))
        }
    }
}
