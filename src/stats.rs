//! Latest-bar change statistics.

use chrono::{DateTime, TimeZone, Utc};

use crate::core::Candle;

/// Derived snapshot of the most recent candle and its change against the
/// previous one. Recomputed on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestStats {
    pub ts: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<u64>,
    /// Close-to-close change.
    pub change_abs: f64,
    /// Close-to-close change in percent; 0 when the previous close is 0.
    pub change_pct: f64,
    /// Hours between the last two bars.
    pub interval_hours: f64,
    /// Percent change per hour; 0 when the two bars share a timestamp.
    pub change_speed: f64,
}

impl LatestStats {
    pub fn datetime_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.ts, 0).single().unwrap()
    }
}

/// Compute change statistics from the last two candles of a series.
///
/// Pure and deterministic. Returns `None` when the series has fewer than
/// two candles or when either of the two relevant closes is missing — a
/// degraded-display case, not an error.
pub fn latest_stats(candles: &[Candle]) -> Option<LatestStats> {
    let [.., prev, last] = candles else {
        return None;
    };
    let prev_close = prev.close?;
    let last_close = last.close?;

    let change_abs = last_close - prev_close;
    let change_pct = if prev_close == 0.0 {
        0.0
    } else {
        change_abs / prev_close * 100.0
    };
    let interval_hours = (last.ts - prev.ts) as f64 / 3600.0;
    let change_speed = if interval_hours > 0.0 {
        change_pct / interval_hours
    } else {
        0.0
    };

    Some(LatestStats {
        ts: last.ts,
        open: last.open,
        high: last.high,
        low: last.low,
        close: last_close,
        volume: last.volume,
        change_abs,
        change_pct,
        interval_hours,
        change_speed,
    })
}
