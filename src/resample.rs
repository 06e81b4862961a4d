//! Calendar resampling of daily candles into weekly/monthly periods.

use chrono::Datelike;

use crate::core::{Candle, Period};

/// Resample an ascending daily series into the target period.
///
/// `Daily` returns an identity copy. `Weekly`/`Monthly` group consecutive
/// days by ISO week / calendar month; within a group, open is the first
/// present open, high/low the extremes of present values, close the last
/// present close and volume the sum of present volumes. A group with no
/// present value for any OHLC field is dropped entirely. Output ordering
/// stays ascending.
pub fn resample(candles: &[Candle], period: Period) -> Vec<Candle> {
    let grouping = match period {
        Period::Daily => return candles.to_vec(),
        Period::Weekly => Grouping::Week,
        Period::Monthly => Grouping::Month,
    };

    let mut out = Vec::new();
    let mut bucket: Option<((i32, u32), Agg)> = None;

    for candle in candles {
        let key = grouping.key(candle);
        match bucket.take() {
            Some((current, mut agg)) if current == key => {
                agg.fold(candle);
                bucket = Some((current, agg));
            }
            prev => {
                if let Some((_, agg)) = prev {
                    out.extend(agg.finish());
                }
                bucket = Some((key, Agg::seed(candle)));
            }
        }
    }
    if let Some((_, agg)) = bucket {
        out.extend(agg.finish());
    }

    out
}

#[derive(Clone, Copy)]
enum Grouping {
    Week,
    Month,
}

impl Grouping {
    /// Calendar bucket identity: (ISO year, ISO week) or (year, month).
    fn key(self, candle: &Candle) -> (i32, u32) {
        let date = candle.datetime_utc().date_naive();
        match self {
            Grouping::Week => {
                let week = date.iso_week();
                (week.year(), week.week())
            }
            Grouping::Month => (date.year(), date.month()),
        }
    }
}

/// Running aggregate for one calendar bucket.
struct Agg {
    ts: i64,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<u64>,
}

impl Agg {
    fn seed(candle: &Candle) -> Self {
        let mut agg = Self {
            ts: candle.ts,
            open: None,
            high: None,
            low: None,
            close: None,
            volume: None,
        };
        agg.fold(candle);
        agg
    }

    fn fold(&mut self, candle: &Candle) {
        // The emitted timestamp is the last constituent day's.
        self.ts = candle.ts;

        if self.open.is_none() {
            self.open = candle.open;
        }
        if let Some(h) = candle.high {
            self.high = Some(self.high.map_or(h, |cur| cur.max(h)));
        }
        if let Some(l) = candle.low {
            self.low = Some(self.low.map_or(l, |cur| cur.min(l)));
        }
        if candle.close.is_some() {
            self.close = candle.close;
        }
        if let Some(v) = candle.volume {
            self.volume = Some(self.volume.unwrap_or(0) + v);
        }
    }

    /// `None` when any OHLC field ended up with no present constituent.
    fn finish(self) -> Option<Candle> {
        let (Some(open), Some(high), Some(low), Some(close)) =
            (self.open, self.high, self.low, self.close)
        else {
            return None;
        };
        Some(Candle {
            ts: self.ts,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            volume: self.volume,
        })
    }
}
