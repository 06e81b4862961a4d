//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Sina K-line data endpoint. Query parameters `symbol`, `scale`, `ma`
/// and `datalen` are appended per request.
pub(crate) const DEFAULT_BASE_KLINE: &str =
    "https://money.finance.sina.com.cn/quotes_service/api/json_v2.php/CN_MarketData.getKLineData";

/// Overall request timeout applied by default.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
