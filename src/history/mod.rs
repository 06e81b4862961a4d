//! Daily K-line history fetching and decoding.

mod wire;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::{Candle, KlineError, SinaClient};
use crate::symbol::StockSymbol;
use wire::WireBar;

/// Number of daily bars requested when none is specified.
pub const DEFAULT_DATALEN: u32 = 240;

/// Provider scale value for daily bars (minutes per trading session).
const DAILY_SCALE: u32 = 240;

/// Fetch daily history for `symbol` with default parameters.
///
/// # Errors
///
/// See [`HistoryBuilder::fetch`].
pub async fn fetch_daily(
    client: &SinaClient,
    symbol: &StockSymbol,
) -> Result<Vec<Candle>, KlineError> {
    HistoryBuilder::new(client, symbol.clone()).fetch().await
}

/// Builder for daily K-line history queries.
#[derive(Debug)]
pub struct HistoryBuilder {
    client: SinaClient,
    symbol: StockSymbol,
    datalen: u32,
}

impl HistoryBuilder {
    pub fn new(client: &SinaClient, symbol: StockSymbol) -> Self {
        Self {
            client: client.clone(),
            symbol,
            datalen: DEFAULT_DATALEN,
        }
    }

    /// Number of trading days of history to request.
    pub fn datalen(mut self, n: u32) -> Self {
        self.datalen = n;
        self
    }

    /// Issue the request and decode the response into an ascending series.
    ///
    /// # Errors
    ///
    /// `Status` for non-2xx responses, `Data` when the body cannot be
    /// decoded, `EmptyResult` when the provider returns zero bars, `Http`
    /// for transport failures (including the request timeout).
    pub async fn fetch(self) -> Result<Vec<Candle>, KlineError> {
        let mut url = self.client.base_kline().clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("symbol", self.symbol.as_str());
            qp.append_pair("scale", &DAILY_SCALE.to_string());
            qp.append_pair("ma", "no");
            qp.append_pair("datalen", &self.datalen.to_string());
        }

        tracing::debug!(symbol = %self.symbol, datalen = self.datalen, "fetching daily history");

        let resp = self.client.http().get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(KlineError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        let candles = decode_bars(&body)?;
        tracing::debug!(symbol = %self.symbol, bars = candles.len(), "decoded daily history");
        Ok(candles)
    }
}

fn decode_bars(body: &str) -> Result<Vec<Candle>, KlineError> {
    let bars: Vec<WireBar> =
        serde_json::from_str(body).map_err(|e| KlineError::Data(format!("json parse error: {e}")))?;

    if bars.is_empty() {
        return Err(KlineError::EmptyResult);
    }

    let mut candles = Vec::with_capacity(bars.len());
    for bar in bars {
        candles.push(Candle {
            ts: parse_day(&bar.day)?,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        });
    }

    // Provider ordering is not stable (newest sometimes first); normalize to
    // ascending and collapse duplicate trading days.
    candles.sort_by_key(|c| c.ts);
    candles.dedup_by_key(|c| c.ts);

    Ok(candles)
}

/// The `day` field is a date for daily bars but carries a time component on
/// intraday scales; accept both. A day that parses as neither fails the
/// fetch, since it is the series index.
fn parse_day(day: &str) -> Result<i64, KlineError> {
    let day = day.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(day, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp())
        .map_err(|e| KlineError::Data(format!("bad day {day:?}: {e}")))
}
