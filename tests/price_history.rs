mod common;

use chrono::{TimeZone, Utc};
use common::{client_for, setup_server};
use httpmock::Method::GET;
use tdameritrade_rs::{FrequencyType, PeriodType, TdError};

const HISTORY_BODY: &str = r#"{
  "candles": [
    { "open": 330.1, "high": 334.0, "low": 329.5, "close": 333.2, "volume": 21500000, "datetime": 1677594000000 },
    { "open": 333.4, "high": 335.8, "low": 332.0, "close": 334.9, "volume": 19800000, "datetime": 1677680400000 }
  ],
  "symbol": "MSFT",
  "empty": false
}"#;

#[tokio::test]
async fn price_history_decodes_candles() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/marketdata/MSFT/pricehistory")
            .query_param("periodType", "day")
            .query_param("period", "10")
            .query_param("frequencyType", "minute")
            .query_param("frequency", "5")
            .query_param("needExtendedHoursData", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(HISTORY_BODY);
    });

    let client = client_for(&server);
    let history = client
        .price_history("MSFT")
        .period_type(PeriodType::Day)
        .period(10)
        .frequency_type(FrequencyType::Minute)
        .frequency(5)
        .need_extended_hours_data(false)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(history.symbol, "MSFT");
    assert!(!history.empty);
    assert_eq!(history.candles.len(), 2);
    assert_eq!(history.candles[0].datetime, 1_677_594_000_000);
    assert_eq!(history.candles[1].close, 334.9);
    assert_eq!(history.candles[1].volume, Some(19_800_000));
}

#[tokio::test]
async fn explicit_window_is_sent_as_epoch_millis() {
    let server = setup_server();
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/marketdata/AAPL/pricehistory")
            .query_param("startDate", start.timestamp_millis().to_string())
            .query_param("endDate", end.timestamp_millis().to_string());
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{ "candles": [], "symbol": "AAPL", "empty": true }"#);
    });

    let client = client_for(&server);
    let history = client
        .price_history("AAPL")
        .start(start)
        .end(end)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(history.empty);
    assert!(history.candles.is_empty());
}

#[tokio::test]
async fn inverted_window_fails_before_any_request() {
    let server = setup_server();
    let client = client_for(&server);

    let err = client
        .price_history("AAPL")
        .start(Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap())
        .end(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, TdError::InvalidDates));
}

#[tokio::test]
async fn price_history_returns_status_error_on_non_2xx() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/marketdata/FAIL/pricehistory");
        then.status(404).body("symbol not found");
    });

    let client = client_for(&server);
    let err = client.get_price_history("FAIL").await.unwrap_err();

    match err {
        TdError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("symbol not found"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
