#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockvol/stockvol/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Built-in sample datasets and an offline [`BarProvider`].

/// Fixed sample bar series.
pub mod fixtures;

pub use fixtures::{demo_bars, fallback_bars, period_one_bars, period_two_bars};

use async_trait::async_trait;
use chrono::NaiveDate;
use stockvol_core::{BarProvider, DailyBar, Period, Result, Symbol};
use tracing::debug;

/// Deterministic provider serving the built-in fixtures.
///
/// Useful offline and in tests: it never fails, ignores the symbol (the
/// fixtures are symbol-agnostic), and returns whichever fixture bars fall
/// inside the requested range — possibly none.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleProvider;

impl SampleProvider {
    /// Creates the sample provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BarProvider for SampleProvider {
    fn name(&self) -> &str {
        "Built-in samples"
    }

    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>> {
        let window = Period::new("requested", start, end);
        let bars: Vec<DailyBar> = period_one_bars()
            .into_iter()
            .chain(period_two_bars())
            .filter(|bar| bar.trade_date().is_ok_and(|date| window.contains(date)))
            .collect();
        debug!(symbol = %symbol, count = bars.len(), "Serving sample bars");
        Ok(bars)
    }
}
