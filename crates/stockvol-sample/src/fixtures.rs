//! Fixed sample bar series.
//!
//! Two deliberately different weekly series, one per comparison slot: the
//! second runs at roughly double the volume of the first, so a fully
//! degraded dashboard still shows a visible two-period contrast.

use stockvol_core::{DailyBar, PeriodSlot};

/// Weekly sample bars covering January through May 2023.
#[must_use]
pub fn period_one_bars() -> Vec<DailyBar> {
    vec![
        DailyBar::new("2023-01-05", 25.50, 45_000),
        DailyBar::new("2023-01-12", 26.75, 62_000),
        DailyBar::new("2023-01-19", 27.25, 58_000),
        DailyBar::new("2023-01-26", 28.00, 71_000),
        DailyBar::new("2023-02-02", 29.50, 83_000),
        DailyBar::new("2023-02-09", 30.25, 76_000),
        DailyBar::new("2023-02-16", 31.00, 92_000),
        DailyBar::new("2023-02-23", 30.50, 88_000),
        DailyBar::new("2023-03-02", 32.75, 105_000),
        DailyBar::new("2023-03-09", 33.25, 98_000),
        DailyBar::new("2023-03-16", 34.00, 112_000),
        DailyBar::new("2023-03-23", 35.50, 125_000),
        DailyBar::new("2023-03-30", 34.75, 118_000),
        DailyBar::new("2023-04-06", 36.25, 132_000),
        DailyBar::new("2023-04-13", 37.50, 145_000),
        DailyBar::new("2023-04-20", 36.75, 138_000),
        DailyBar::new("2023-04-27", 38.25, 152_000),
        DailyBar::new("2023-05-04", 39.00, 165_000),
        DailyBar::new("2023-05-11", 38.50, 158_000),
        DailyBar::new("2023-05-18", 40.25, 172_000),
        DailyBar::new("2023-05-25", 41.00, 185_000),
    ]
}

/// Weekly sample bars covering January through May 2024.
#[must_use]
pub fn period_two_bars() -> Vec<DailyBar> {
    vec![
        DailyBar::new("2024-01-04", 42.50, 95_000),
        DailyBar::new("2024-01-11", 43.75, 108_000),
        DailyBar::new("2024-01-18", 45.00, 122_000),
        DailyBar::new("2024-01-25", 46.25, 135_000),
        DailyBar::new("2024-02-01", 47.50, 148_000),
        DailyBar::new("2024-02-08", 48.75, 162_000),
        DailyBar::new("2024-02-15", 50.00, 175_000),
        DailyBar::new("2024-02-22", 51.25, 189_000),
        DailyBar::new("2024-02-29", 52.50, 202_000),
        DailyBar::new("2024-03-07", 53.75, 215_000),
        DailyBar::new("2024-03-14", 55.00, 229_000),
        DailyBar::new("2024-03-21", 56.25, 242_000),
        DailyBar::new("2024-03-28", 57.50, 255_000),
        DailyBar::new("2024-04-04", 58.75, 269_000),
        DailyBar::new("2024-04-11", 60.00, 282_000),
        DailyBar::new("2024-04-18", 61.25, 295_000),
        DailyBar::new("2024-04-25", 62.50, 309_000),
        DailyBar::new("2024-05-02", 63.75, 322_000),
        DailyBar::new("2024-05-09", 65.00, 335_000),
        DailyBar::new("2024-05-16", 66.25, 349_000),
    ]
}

/// Monthly demo bars carrying the full OHLC shape of the wire format.
#[must_use]
pub fn demo_bars() -> Vec<DailyBar> {
    vec![
        DailyBar::new("2023-04-01", 25.45, 1_250_000)
            .with_range(25.10, 25.89, 24.95)
            .with_adj_close(25.45),
        DailyBar::new("2023-05-01", 27.25, 1_650_000)
            .with_range(26.15, 27.50, 26.00)
            .with_adj_close(27.25),
        DailyBar::new("2023-06-01", 29.50, 2_100_000)
            .with_range(28.05, 29.75, 27.90)
            .with_adj_close(29.50),
        DailyBar::new("2023-07-01", 31.25, 2_250_000)
            .with_range(30.20, 31.50, 30.00)
            .with_adj_close(31.25),
        DailyBar::new("2023-08-01", 33.60, 2_650_000)
            .with_range(32.35, 33.75, 32.20)
            .with_adj_close(33.60),
    ]
}

/// The designated fallback dataset for a comparison slot.
#[must_use]
pub fn fallback_bars(slot: PeriodSlot) -> Vec<DailyBar> {
    match slot {
        PeriodSlot::First => period_one_bars(),
        PeriodSlot::Second => period_two_bars(),
    }
}
