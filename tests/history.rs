mod common;

use common::{bar, body, mock_kline, setup_server, test_client};
use sinakline::{HistoryBuilder, KlineError, StockSymbol};

fn symbol() -> StockSymbol {
    StockSymbol::parse("sz000001").unwrap()
}

#[tokio::test]
async fn daily_history_happy_path() {
    let server = setup_server();
    let payload = body(&[
        bar("2024-01-02", 10.0, 10.5, 9.8, 10.2, 120_000),
        bar("2024-01-03", 10.2, 10.8, 10.1, 10.6, 150_000),
    ]);
    let mock = mock_kline(&server, "sz000001", &payload);
    let client = test_client(&server);

    let bars = HistoryBuilder::new(&client, symbol()).fetch().await.unwrap();

    mock.assert();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].open, Some(10.0));
    assert_eq!(bars[0].volume, Some(120_000));
    assert_eq!(bars[1].close, Some(10.6));
}

#[tokio::test]
async fn request_carries_fixed_daily_scale_and_datalen() {
    let server = setup_server();
    let payload = body(&[bar("2024-01-02", 10.0, 10.5, 9.8, 10.2, 1)]);
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/kline")
            .query_param("symbol", "sz000001")
            .query_param("scale", "240")
            .query_param("ma", "no")
            .query_param("datalen", "30");
        then.status(200)
            .header("content-type", "application/json")
            .body(payload.as_str());
    });
    let client = test_client(&server);

    let bars = HistoryBuilder::new(&client, symbol())
        .datalen(30)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 1);
}

#[tokio::test]
async fn bars_are_sorted_ascending_and_deduplicated() {
    let server = setup_server();
    // Newest first, with a duplicated trading day.
    let payload = body(&[
        bar("2024-01-04", 10.6, 10.9, 10.5, 10.8, 90_000),
        bar("2024-01-03", 10.2, 10.8, 10.1, 10.6, 150_000),
        bar("2024-01-03", 10.2, 10.8, 10.1, 10.6, 150_000),
        bar("2024-01-02", 10.0, 10.5, 9.8, 10.2, 120_000),
    ]);
    let mock = mock_kline(&server, "sz000001", &payload);
    let client = test_client(&server);

    let bars = HistoryBuilder::new(&client, symbol()).fetch().await.unwrap();

    mock.assert();
    assert_eq!(bars.len(), 3);
    assert!(bars.windows(2).all(|w| w[0].ts < w[1].ts));
    assert_eq!(bars[0].open, Some(10.0));
    assert_eq!(bars[2].close, Some(10.8));
}

#[tokio::test]
async fn unparseable_numeric_becomes_missing_marker() {
    let server = setup_server();
    // One broken open plus mixed string/number typing; the fetch must still
    // succeed and only the broken field is missing.
    let payload = r#"[
        {"day":"2024-01-02","open":"--","high":"10.500","low":"9.800","close":10.2,"volume":120000},
        {"day":"2024-01-03","open":"10.200","high":"10.800","low":"10.100","close":"10.600","volume":"150000"}
    ]"#;
    let mock = mock_kline(&server, "sz000001", payload);
    let client = test_client(&server);

    let bars = HistoryBuilder::new(&client, symbol()).fetch().await.unwrap();

    mock.assert();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].open, None);
    assert_eq!(bars[0].close, Some(10.2));
    assert_eq!(bars[0].volume, Some(120_000));
    assert_eq!(bars[1].open, Some(10.2));
}

#[tokio::test]
async fn intraday_style_day_strings_are_accepted() {
    let server = setup_server();
    let payload = body(&[bar("2024-01-02 15:00:00", 10.0, 10.5, 9.8, 10.2, 1)]);
    let mock = mock_kline(&server, "sz000001", &payload);
    let client = test_client(&server);

    let bars = HistoryBuilder::new(&client, symbol()).fetch().await.unwrap();

    mock.assert();
    assert_eq!(bars.len(), 1);
}

#[tokio::test]
async fn unparseable_day_fails_the_fetch() {
    let server = setup_server();
    let payload = body(&[bar("not-a-date", 10.0, 10.5, 9.8, 10.2, 1)]);
    let mock = mock_kline(&server, "sz000001", &payload);
    let client = test_client(&server);

    let err = HistoryBuilder::new(&client, symbol())
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, KlineError::Data(_)));
}

#[tokio::test]
async fn empty_response_is_empty_result() {
    let server = setup_server();
    let mock = mock_kline(&server, "sz000001", "[]");
    let client = test_client(&server);

    let err = HistoryBuilder::new(&client, symbol())
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, KlineError::EmptyResult));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/kline");
        then.status(500).body("oops");
    });
    let client = test_client(&server);

    let err = HistoryBuilder::new(&client, symbol())
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, KlineError::Status { status: 500, .. }));
}

#[tokio::test]
async fn garbage_body_is_data_error() {
    let server = setup_server();
    let mock = mock_kline(&server, "sz000001", "not json at all");
    let client = test_client(&server);

    let err = HistoryBuilder::new(&client, symbol())
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, KlineError::Data(_)));
}
