//! Provider trait for fetching daily bar series.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{DailyBar, Symbol},
};

/// Source of historical daily bars.
///
/// Implementations fetch one symbol's bars over an inclusive date range.
/// Returned sequences carry no ordering guarantee; every chronological
/// operation orders its input itself.
#[async_trait]
pub trait BarProvider: Send + Sync + Debug {
    /// Human-readable provider name, used in diagnostics.
    fn name(&self) -> &str;

    /// Fetches daily bars for `symbol` between `start` and `end` inclusive.
    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>>;
}
