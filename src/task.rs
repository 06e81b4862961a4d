//! Background fetch orchestration.
//!
//! One worker thread per request: fetch, resample, compute stats, then hand
//! the result back over a channel. The spawning side polls the receiver;
//! nothing is shared across the thread boundary.

use std::sync::mpsc;
use std::thread;

use crate::core::{Candle, KlineError, Period, SinaClient};
use crate::history::HistoryBuilder;
use crate::resample::resample;
use crate::stats::{LatestStats, latest_stats};
use crate::symbol::StockSymbol;

/// Everything the display side needs from one completed fetch.
#[derive(Debug, Clone)]
pub struct FetchedData {
    pub symbol: StockSymbol,
    pub period: Period,
    pub candles: Vec<Candle>,
    pub stats: Option<LatestStats>,
}

/// Result delivered on the handoff channel.
pub type FetchResult = Result<FetchedData, KlineError>;

/// Spawn a background fetch of `datalen` daily bars, resampled to `period`.
///
/// Exactly one message is sent on the returned channel, then the worker
/// exits. There is no cancellation: dropping the receiver lets the request
/// run to completion and the failed send is ignored.
pub fn spawn_fetch(
    client: SinaClient,
    symbol: StockSymbol,
    period: Period,
    datalen: u32,
) -> mpsc::Receiver<FetchResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = run_fetch(&client, &symbol, period, datalen);
        if tx.send(result).is_err() {
            tracing::debug!(%symbol, "dropping fetch result: receiver is gone");
        }
    });
    rx
}

fn run_fetch(
    client: &SinaClient,
    symbol: &StockSymbol,
    period: Period,
    datalen: u32,
) -> FetchResult {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    let daily = rt.block_on(
        HistoryBuilder::new(client, symbol.clone())
            .datalen(datalen)
            .fetch(),
    )?;

    let candles = resample(&daily, period);
    if candles.is_empty() {
        // Every resampled group was dropped for having no usable values.
        return Err(KlineError::EmptyResult);
    }
    let stats = latest_stats(&candles);

    Ok(FetchedData {
        symbol: symbol.clone(),
        period,
        candles,
        stats,
    })
}
