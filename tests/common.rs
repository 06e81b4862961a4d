#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use sinakline::SinaClient;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server's K-line endpoint.
pub fn test_client(server: &MockServer) -> SinaClient {
    SinaClient::builder()
        .base_kline(Url::parse(&format!("{}/kline", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// One well-formed provider bar with string-typed numerics, the shape Sina
/// actually sends.
pub fn bar(day: &str, open: f64, high: f64, low: f64, close: f64, volume: u64) -> String {
    format!(
        r#"{{"day":"{day}","open":"{open:.3}","high":"{high:.3}","low":"{low:.3}","close":"{close:.3}","volume":"{volume}"}}"#
    )
}

pub fn body(bars: &[String]) -> String {
    format!("[{}]", bars.join(","))
}

pub fn mock_kline<'a>(server: &'a MockServer, symbol: &str, body: &str) -> Mock<'a> {
    let symbol = symbol.to_owned();
    let body = body.to_owned();
    server.mock(|when, then| {
        when.method(GET)
            .path("/kline")
            .query_param("symbol", symbol.as_str());
        then.status(200)
            .header("content-type", "application/json")
            .body(body.as_str());
    })
}
