//! Error types for series operations.
//!
//! This module defines [`SeriesError`], covering everything that can go wrong
//! between issuing a fetch and handing bars to the aggregation operations.
//! The aggregation operations themselves have no error path: degraded input
//! yields zero-valued or tagged output instead.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while fetching or validating bar series.
#[derive(Error, Debug)]
pub enum SeriesError {
    /// Network-level failure (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status and an error message.
    #[error("Provider error: {0}")]
    Api(String),

    /// Rate limit exceeded at the endpoint.
    #[error("Rate limited: retry after {retry_after:?}")]
    RateLimited {
        /// Suggested time to wait before retrying, when the endpoint said so.
        retry_after: Option<std::time::Duration>,
    },

    /// The requested symbol was not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The endpoint returned no bars for the requested range.
    #[error("No data for {symbol} in range {start} to {end}")]
    NoData {
        /// The symbol that was requested.
        symbol: String,
        /// Start of the requested range (inclusive).
        start: NaiveDate,
        /// End of the requested range (inclusive).
        end: NaiveDate,
    },

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided by the caller.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using [`SeriesError`].
pub type Result<T> = std::result::Result<T, SeriesError>;
