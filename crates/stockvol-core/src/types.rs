//! Core data types for daily bar series.
//!
//! This module defines the two fundamental types:
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`DailyBar`] - One trading day's price/volume record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A trading symbol/ticker.
///
/// Symbols are uppercased on creation, so `"etg.to"` and `"ETG.TO"` are the
/// same symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One trading day for one symbol, as delivered by the historical endpoint.
///
/// The `date` field keeps the wire's ISO `YYYY-MM-DD` form. Operations that
/// need chronology parse it through [`DailyBar::trade_date`] and drop bars
/// whose date does not parse, so a single malformed record never poisons a
/// whole series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBar {
    /// Calendar date in ISO form (`YYYY-MM-DD`).
    pub date: String,
    /// Opening price.
    #[serde(default)]
    pub open: Option<f64>,
    /// Highest price of the day.
    #[serde(default)]
    pub high: Option<f64>,
    /// Lowest price of the day.
    #[serde(default)]
    pub low: Option<f64>,
    /// Closing price.
    #[serde(default)]
    pub close: Option<f64>,
    /// Dividend/split adjusted closing price (wire name `adjClose`).
    #[serde(default)]
    pub adj_close: Option<f64>,
    /// Shares traded. Absent on the wire means zero.
    #[serde(default)]
    pub volume: u64,
}

impl DailyBar {
    /// Creates a bar with the fields every dataset carries.
    #[must_use]
    pub fn new(date: impl Into<String>, close: f64, volume: u64) -> Self {
        Self {
            date: date.into(),
            close: Some(close),
            volume,
            ..Self::default()
        }
    }

    /// Sets the open/high/low prices.
    #[must_use]
    pub const fn with_range(mut self, open: f64, high: f64, low: f64) -> Self {
        self.open = Some(open);
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    /// Sets the adjusted close price.
    #[must_use]
    pub const fn with_adj_close(mut self, adj_close: f64) -> Self {
        self.adj_close = Some(adj_close);
        self
    }

    /// Price used for dollar-volume and average-price aggregation.
    ///
    /// Precedence: `close`, else `adj_close`, else `0.0`. This accessor is
    /// the single place that precedence lives.
    #[must_use]
    pub fn resolved_price(&self) -> f64 {
        self.close.or(self.adj_close).unwrap_or(0.0)
    }

    /// Parses the bar's calendar date.
    pub fn trade_date(&self) -> chrono::ParseResult<NaiveDate> {
        self.date.parse()
    }
}

/// Parses a bar's date, logging and discarding bars that do not parse.
///
/// Shared by every chronological operation so the drop-with-warning policy
/// stays uniform.
pub(crate) fn parse_trade_date(bar: &DailyBar) -> Option<NaiveDate> {
    match bar.trade_date() {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(date = %bar.date, error = %err, "dropping bar with malformed date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_uppercases() {
        assert_eq!(Symbol::new("etg.to").as_str(), "ETG.TO");
        assert_eq!(Symbol::from("aapl"), Symbol::new("AAPL"));
    }

    #[test]
    fn test_resolved_price_precedence() {
        let bar = DailyBar::new("2024-03-15", 50.0, 1000).with_adj_close(49.5);
        assert_eq!(bar.resolved_price(), 50.0);

        let adj_only = DailyBar {
            date: "2024-03-15".to_string(),
            adj_close: Some(49.5),
            volume: 1000,
            ..DailyBar::default()
        };
        assert_eq!(adj_only.resolved_price(), 49.5);

        let priceless = DailyBar {
            date: "2024-03-15".to_string(),
            volume: 1000,
            ..DailyBar::default()
        };
        assert_eq!(priceless.resolved_price(), 0.0);
    }

    #[test]
    fn test_trade_date_parses_iso() {
        let bar = DailyBar::new("2024-03-15", 50.0, 1000);
        assert_eq!(
            bar.trade_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(DailyBar::new("not-a-date", 1.0, 1).trade_date().is_err());
    }

    #[test]
    fn test_wire_format_uses_adj_close_camel_case() {
        let json = r#"{"date":"2023-04-01","open":25.1,"high":25.89,"low":24.95,"close":25.45,"volume":1250000,"adjClose":25.45}"#;
        let bar: DailyBar = serde_json::from_str(json).unwrap();
        assert_eq!(bar.adj_close, Some(25.45));
        assert_eq!(bar.volume, 1_250_000);
    }

    #[test]
    fn test_wire_format_defaults_missing_fields() {
        let json = r#"{"date":"2023-01-05","volume":45000,"close":25.5}"#;
        let bar: DailyBar = serde_json::from_str(json).unwrap();
        assert_eq!(bar.open, None);
        assert_eq!(bar.adj_close, None);
        assert_eq!(bar.volume, 45_000);
    }
}
