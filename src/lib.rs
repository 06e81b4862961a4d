//! sinakline: fetch daily K-line history from the Sina quote service,
//! resample it into daily/weekly/monthly candles and derive latest-bar
//! change statistics.
//!
//! The `sinakline` binary wraps this library in an egui desktop app; the
//! library itself is UI-free and testable against a mock HTTP server.

pub mod core;
pub mod history;
pub mod indicators;
pub mod resample;
pub mod stats;
pub mod symbol;
pub mod task;

pub use crate::core::{Candle, KlineError, Period, SinaClient, SinaClientBuilder};
pub use crate::history::{DEFAULT_DATALEN, HistoryBuilder, fetch_daily};
pub use crate::resample::resample;
pub use crate::stats::{LatestStats, latest_stats};
pub use crate::symbol::StockSymbol;
pub use crate::task::{FetchResult, FetchedData, spawn_fetch};
