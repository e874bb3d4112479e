#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockvol/stockvol/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Historical daily-bar endpoint client.
//!
//! This crate provides [`HistoricalApiProvider`], an implementation of the
//! [`BarProvider`] trait from `stockvol-core` against the proxied historical
//! endpoint.
//!
//! # Features
//!
//! - Fetch daily bars by symbol and inclusive date range
//! - Built-in rate limiting (1 request per second by default)
//! - Typed mapping of HTTP statuses and provider error payloads
//!
//! # Example
//!
//! ```no_run
//! use stockvol_http::HistoricalApiProvider;
//! use stockvol_core::{BarProvider, Symbol};
//! use chrono::NaiveDate;
//!
//! # async fn example() -> stockvol_core::Result<()> {
//! let provider = HistoricalApiProvider::new("https://example.com/api/historical");
//! let symbol = Symbol::new("ETG.TO");
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 5, 31).unwrap();
//!
//! let bars = provider.fetch_daily_bars(&symbol, start, end).await?;
//! println!("Fetched {} bars", bars.len());
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use stockvol_core::{BarProvider, DailyBar, Result, SeriesError, Symbol};
use tokio::time::sleep;
use tracing::debug;

/// Default rate limit delay in milliseconds.
const DEFAULT_RATE_LIMIT_MS: u64 = 1000;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the proxied historical daily-bar endpoint.
///
/// Implements [`BarProvider`]. One instance may be shared across tasks; the
/// rate limiter serializes request pacing without locking.
#[derive(Debug)]
pub struct HistoricalApiProvider {
    client: reqwest::Client,
    base_url: String,
    rate_limit_ms: u64,
    last_request_time: AtomicU64,
}

impl HistoricalApiProvider {
    /// Creates a provider for the endpoint at `base_url` with default
    /// settings (1 request per second).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_rate_limit(base_url, Duration::from_millis(DEFAULT_RATE_LIMIT_MS))
    }

    /// Creates a provider using a caller-supplied HTTP client.
    ///
    /// Rate limiting is still applied.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            rate_limit_ms: DEFAULT_RATE_LIMIT_MS,
            last_request_time: AtomicU64::new(0),
        }
    }

    /// Creates a provider with a custom minimum interval between requests.
    #[must_use]
    pub fn with_rate_limit(base_url: impl Into<String>, rate_limit: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            rate_limit_ms: rate_limit.as_millis() as u64,
            last_request_time: AtomicU64::new(0),
        }
    }

    /// Waits out the configured minimum interval since the last request.
    async fn apply_rate_limit(&self) {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        let last = self.last_request_time.load(Ordering::Relaxed);
        let elapsed = now.saturating_sub(last);

        if elapsed < self.rate_limit_ms {
            let wait_time = self.rate_limit_ms - elapsed;
            debug!("Rate limiting: waiting {}ms", wait_time);
            sleep(Duration::from_millis(wait_time)).await;
        }

        self.last_request_time.store(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
            Ordering::Relaxed,
        );
    }

    /// Builds the request URL for a symbol and date range.
    fn build_request_url(&self, symbol: &Symbol, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}?symbol={}&start={}&end={}",
            self.base_url,
            symbol.as_str(),
            start,
            end
        )
    }

    /// Maps a non-2xx response to a [`SeriesError`].
    ///
    /// The endpoint reports failures as `{"error": string}`; when that payload
    /// parses, its message is surfaced, otherwise the HTTP status is.
    async fn error_from_response(symbol: &Symbol, response: reqwest::Response) -> SeriesError {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return SeriesError::RateLimited {
                retry_after: Some(Duration::from_secs(60)),
            };
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return SeriesError::SymbolNotFound(symbol.to_string());
        }

        match response.json::<ErrorPayload>().await {
            Ok(payload) => SeriesError::Api(payload.error),
            Err(_) => SeriesError::Api(format!("HTTP {status} for {symbol}")),
        }
    }
}

#[async_trait]
impl BarProvider for HistoricalApiProvider {
    fn name(&self) -> &str {
        "Historical API"
    }

    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>> {
        if start > end {
            return Err(SeriesError::InvalidParameter(format!(
                "Start date {start} is after end date {end}"
            )));
        }

        self.apply_rate_limit().await;

        let url = self.build_request_url(symbol, start, end);
        debug!("Fetching daily bars: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SeriesError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(symbol, response).await);
        }

        let bars: Vec<DailyBar> = response
            .json()
            .await
            .map_err(|e| SeriesError::Parse(e.to_string()))?;

        if bars.is_empty() {
            return Err(SeriesError::NoData {
                symbol: symbol.to_string(),
                start,
                end,
            });
        }

        debug!(symbol = %symbol, count = bars.len(), "Fetched daily bars");
        Ok(bars)
    }
}

/// Error payload shape of the endpoint.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
}
