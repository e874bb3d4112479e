//! Concurrent two-period fetching with tagged fallback.

use std::fmt;
use std::sync::Arc;

use futures::join;
use serde::Serialize;
use stockvol_core::{BarProvider, DailyBar, Period, PeriodSlot, Symbol, ZeroVolumePolicy};
use stockvol_sample::fallback_bars;
use tracing::{debug, warn};

use crate::report::Comparison;

/// Why a period's live data was replaced with the built-in samples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FallbackReason {
    /// The fetch failed: transport error, provider error, malformed body.
    FetchFailed(String),
    /// The fetch succeeded but carried no bars.
    EmptySeries,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed(message) => write!(f, "could not fetch live data ({message})"),
            Self::EmptySeries => write!(f, "endpoint returned no data"),
        }
    }
}

/// Provenance-tagged bar series.
///
/// Consumers branch on the tag to render a visible data-provenance
/// indicator instead of inferring it from an error string.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SeriesSource {
    /// Live data fetched from the provider.
    Fetched(Vec<DailyBar>),
    /// Built-in sample data substituted for a degraded fetch.
    Fallback {
        /// The substituted sample bars.
        bars: Vec<DailyBar>,
        /// What degraded.
        reason: FallbackReason,
    },
}

impl SeriesSource {
    /// The bars, wherever they came from.
    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        match self {
            Self::Fetched(bars) | Self::Fallback { bars, .. } => bars,
        }
    }

    /// True when this series is substituted sample data.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// One period's data with its window, slot and provenance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodSeries {
    /// The comparison window this series belongs to.
    pub period: Period,
    /// Which comparison slot the series fills.
    pub slot: PeriodSlot,
    /// The data and where it came from.
    pub source: SeriesSource,
}

impl PeriodSeries {
    /// The period's bars, live or substituted.
    #[must_use]
    pub fn bars(&self) -> &[DailyBar] {
        self.source.bars()
    }

    /// Non-fatal advisory for this period, present only when degraded.
    #[must_use]
    pub fn advisory(&self) -> Option<String> {
        match &self.source {
            SeriesSource::Fetched(_) => None,
            SeriesSource::Fallback { reason, .. } => Some(format!(
                "{}: {reason}. Showing sample data instead.",
                self.period.label
            )),
        }
    }
}

/// Fetches two periods concurrently and assembles a comparison report.
///
/// Both fetches are issued together and both are awaited before any
/// aggregation. Per period, a failed or empty fetch degrades to that slot's
/// built-in sample dataset with the provenance recorded; the other period
/// keeps its live data. There is no hard failure path: every input yields a
/// renderable report.
#[derive(Clone, Debug)]
pub struct ComparisonService {
    provider: Arc<dyn BarProvider>,
    zero_volume: ZeroVolumePolicy,
}

impl ComparisonService {
    /// Creates a service around a bar provider.
    #[must_use]
    pub fn new(provider: Arc<dyn BarProvider>) -> Self {
        Self {
            provider,
            zero_volume: ZeroVolumePolicy::default(),
        }
    }

    /// Sets the zero-volume policy used for month/day alignment.
    #[must_use]
    pub const fn with_zero_volume_policy(mut self, policy: ZeroVolumePolicy) -> Self {
        self.zero_volume = policy;
        self
    }

    /// Fetches both periods concurrently and builds the full report.
    pub async fn compare(
        &self,
        symbol: &Symbol,
        period_one: Period,
        period_two: Period,
    ) -> Comparison {
        let (first, second) = join!(
            self.fetch_period(symbol, period_one, PeriodSlot::First),
            self.fetch_period(symbol, period_two, PeriodSlot::Second),
        );
        Comparison::assemble(symbol.clone(), first, second, self.zero_volume)
    }

    /// Fetches one period, reducing the outcome to a tagged series.
    async fn fetch_period(&self, symbol: &Symbol, period: Period, slot: PeriodSlot) -> PeriodSeries {
        let source = match self
            .provider
            .fetch_daily_bars(symbol, period.start, period.end)
            .await
        {
            Ok(bars) if bars.is_empty() => {
                warn!(symbol = %symbol, slot = ?slot, "Endpoint returned no bars, substituting samples");
                SeriesSource::Fallback {
                    bars: fallback_bars(slot),
                    reason: FallbackReason::EmptySeries,
                }
            }
            Ok(bars) => {
                debug!(symbol = %symbol, slot = ?slot, count = bars.len(), "Fetched live bars");
                SeriesSource::Fetched(bars)
            }
            Err(err) => {
                warn!(symbol = %symbol, slot = ?slot, error = %err, "Fetch degraded, substituting samples");
                SeriesSource::Fallback {
                    bars: fallback_bars(slot),
                    reason: FallbackReason::FetchFailed(err.to_string()),
                }
            }
        };
        PeriodSeries {
            period,
            slot,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::{Datelike, NaiveDate};
    use stockvol_core::{PercentChange, Result, SeriesError};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn periods() -> (Period, Period) {
        (
            Period::new("Period 1", day(2023, 1, 1), day(2023, 5, 31)),
            Period::new("Period 2", day(2024, 1, 1), day(2024, 5, 31)),
        )
    }

    /// Fails 2023 fetches, serves fixed bars for everything else.
    #[derive(Debug)]
    struct YearGatedProvider;

    #[async_trait]
    impl BarProvider for YearGatedProvider {
        fn name(&self) -> &str {
            "year-gated"
        }

        async fn fetch_daily_bars(
            &self,
            _symbol: &Symbol,
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<DailyBar>> {
            if start.year() == 2023 {
                return Err(SeriesError::Network("connection refused".to_string()));
            }
            Ok(vec![DailyBar::new("2024-01-05", 42.5, 95_000)])
        }
    }

    /// Always answers with an empty array.
    #[derive(Debug)]
    struct EmptyProvider;

    #[async_trait]
    impl BarProvider for EmptyProvider {
        fn name(&self) -> &str {
            "empty"
        }

        async fn fetch_daily_bars(
            &self,
            _symbol: &Symbol,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<DailyBar>> {
            Ok(Vec::new())
        }
    }

    /// Serves a small fixed series per requested year.
    #[derive(Debug)]
    struct ScriptedProvider;

    #[async_trait]
    impl BarProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn fetch_daily_bars(
            &self,
            _symbol: &Symbol,
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<DailyBar>> {
            if start.year() == 2023 {
                Ok(vec![
                    DailyBar::new("2023-01-05", 25.0, 100),
                    DailyBar::new("2023-02-05", 30.0, 200),
                ])
            } else {
                Ok(vec![DailyBar::new("2024-01-05", 40.0, 150)])
            }
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_that_period_only() {
        let service = ComparisonService::new(Arc::new(YearGatedProvider));
        let (period_one, period_two) = periods();
        let report = service
            .compare(&Symbol::new("ETG.TO"), period_one, period_two)
            .await;

        assert!(report.first.source.is_fallback());
        assert_eq!(report.first.bars(), stockvol_sample::period_one_bars());
        match &report.first.source {
            SeriesSource::Fallback { reason, .. } => {
                assert!(matches!(reason, FallbackReason::FetchFailed(_)));
            }
            SeriesSource::Fetched(_) => panic!("expected fallback"),
        }

        assert!(!report.second.source.is_fallback());
        assert_eq!(report.second.bars().len(), 1);

        assert!(report.is_degraded());
        let advisory = report.advisory().unwrap();
        assert!(advisory.contains("Period 1"));
        assert!(!advisory.contains("Period 2"));
    }

    #[tokio::test]
    async fn test_empty_fetch_substitutes_slot_samples() {
        let service = ComparisonService::new(Arc::new(EmptyProvider));
        let (period_one, period_two) = periods();
        let report = service
            .compare(&Symbol::new("ETG.TO"), period_one, period_two)
            .await;

        for (series, expected) in [
            (&report.first, stockvol_sample::period_one_bars()),
            (&report.second, stockvol_sample::period_two_bars()),
        ] {
            match &series.source {
                SeriesSource::Fallback { bars, reason } => {
                    assert_eq!(*reason, FallbackReason::EmptySeries);
                    assert_eq!(*bars, expected);
                }
                SeriesSource::Fetched(_) => panic!("expected fallback"),
            }
        }
    }

    #[tokio::test]
    async fn test_live_report_assembly() {
        let service = ComparisonService::new(Arc::new(ScriptedProvider));
        let (period_one, period_two) = periods();
        let report = service
            .compare(&Symbol::new("ETG.TO"), period_one, period_two)
            .await;

        assert!(!report.is_degraded());
        assert_eq!(report.advisory(), None);

        // Three distinct dates across both periods.
        assert_eq!(report.daily_volume.len(), 3);

        // Month/day alignment folds the two Jan-05 bars together.
        let points = &report.normalized_volume.points;
        assert_eq!(points.len(), 2);
        assert_eq!((points[0].volume_a, points[0].volume_b), (100, 150));
        assert_eq!((points[1].volume_a, points[1].volume_b), (200, 0));

        // Breakdown: first period's months, then the second's.
        let labels: Vec<&str> = report
            .monthly_breakdown
            .iter()
            .map(|m| m.period_label.as_str())
            .collect();
        assert_eq!(labels, vec!["Period 1", "Period 1", "Period 2"]);

        assert_eq!(report.monthly_dollar_volume.len(), 3);

        assert_eq!(report.stats.first.total_volume, 300);
        assert_eq!(report.stats.second.total_volume, 150);
        assert_eq!(report.stats.volume_change, PercentChange::Change(-50.0));
        assert_eq!(report.stats.peak_daily_volume, 200);
    }
}
