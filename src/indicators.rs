//! Overlay indicators for the chart.

use crate::core::Candle;

/// Simple moving average over closes.
///
/// One output slot per input candle: `None` until the window is full and
/// whenever a close inside the window is missing.
pub fn moving_average(candles: &[Candle], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; candles.len()];
    if window == 0 {
        return out;
    }

    let closes: Vec<Option<f64>> = candles.iter().map(|c| c.close).collect();
    for i in (window - 1)..candles.len() {
        let span = &closes[i + 1 - window..=i];
        if span.iter().all(Option::is_some) {
            let sum: f64 = span.iter().flatten().sum();
            out[i] = Some(sum / window as f64);
        }
    }
    out
}
