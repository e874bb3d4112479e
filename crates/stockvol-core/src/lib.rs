#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockvol/stockvol/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and pure operations for two-period volume comparison:
//!
//! - [`Symbol`](types::Symbol), [`DailyBar`](types::DailyBar) - the data model
//! - [`Period`](period::Period), [`PeriodSlot`](period::PeriodSlot) - comparison windows
//! - [`BarProvider`](provider::BarProvider) - trait implemented by data sources
//! - [`merge_by_date`](align::merge_by_date), [`align_month_day`](align::align_month_day) - series alignment
//! - [`aggregate_by_month`](monthly::aggregate_by_month), [`merge_dollar_volume`](monthly::merge_dollar_volume) - monthly aggregation
//! - [`summarize_period`](summary::summarize_period), [`percent_change`](summary::percent_change) - whole-period statistics

/// Alignment of two bar series on shared axes.
pub mod align;
/// Error types for series operations.
pub mod error;
/// Per-month aggregation of daily bars.
pub mod monthly;
/// Comparison period definitions.
pub mod period;
/// Provider trait for fetching daily bars.
pub mod provider;
/// Whole-period summaries and percentage deltas.
pub mod summary;
/// Core data types (Symbol, DailyBar).
pub mod types;

// Re-export commonly used items at crate root
pub use align::{
    AlignedSeries, DailyVolumePoint, MonthDayPoint, ZeroVolumePolicy, align_month_day,
    merge_by_date,
};
pub use error::{Result, SeriesError};
pub use monthly::{
    DollarVolumeRow, MonthlyAggregate, aggregate_by_month, merge_dollar_volume, month_abbrev,
    month_name, month_position,
};
pub use period::{Period, PeriodSlot};
pub use provider::BarProvider;
pub use summary::{PercentChange, PeriodSummary, percent_change, summarize_period};
pub use types::{DailyBar, Symbol};
