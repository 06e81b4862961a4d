//! Shared data models used across the fetch, resample and stats modules.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// One OHLCV bar.
///
/// `ts` is Unix seconds (UTC midnight of the trading day for daily bars).
/// Numeric fields the provider sent in an unparseable form are `None`;
/// a bar is kept even when some of its fields are missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub ts: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

impl Candle {
    pub fn datetime_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.ts, 0).single().unwrap()
    }
}

/// Aggregation granularity for a candle series.
///
/// The provider only serves daily bars; weekly and monthly series are
/// produced locally by [`crate::resample::resample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Short label for UI display.
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }

    /// All periods in selector order.
    pub fn all() -> &'static [Period] {
        &[Period::Daily, Period::Weekly, Period::Monthly]
    }
}
