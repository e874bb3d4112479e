#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockvol/stockvol/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Facade crate for the two-period volume comparison toolkit.
//!
//! Re-exports the core types and operations, the built-in sample datasets,
//! and (with the `http` feature, on by default) the historical endpoint
//! client. Adds [`ComparisonService`] for concurrent fetching with tagged
//! fallback, [`Comparison`] as the assembled dashboard payload, and
//! [`ComparisonSession`] for latest-wins refresh arbitration.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use stockvol::{ComparisonService, HistoricalApiProvider, Period, Symbol};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = Arc::new(HistoricalApiProvider::new(
//!         "https://example.com/api/historical",
//!     ));
//!     let service = ComparisonService::new(provider);
//!
//!     let report = service
//!         .compare(
//!             &Symbol::new("ETG.TO"),
//!             Period::new(
//!                 "Period 1",
//!                 NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!                 NaiveDate::from_ymd_opt(2023, 5, 31).unwrap(),
//!             ),
//!             Period::new(
//!                 "Period 2",
//!                 NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!                 NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
//!             ),
//!         )
//!         .await;
//!
//!     if let Some(note) = report.advisory() {
//!         eprintln!("{note}");
//!     }
//!     println!("{} merged points", report.daily_volume.len());
//! }
//! ```

// Core types and operations
pub use stockvol_core::*;

// Built-in samples and the offline provider
pub use stockvol_sample::{
    SampleProvider, demo_bars, fallback_bars, period_one_bars, period_two_bars,
};

// Endpoint client
#[cfg(feature = "http")]
pub use stockvol_http::HistoricalApiProvider;

mod report;
mod service;
mod session;

pub use report::{Comparison, HeadlineStats};
pub use service::{ComparisonService, FallbackReason, PeriodSeries, SeriesSource};
pub use session::{ComparisonSession, RefreshOutcome, Ticket};
