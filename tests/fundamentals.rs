mod common;

use common::{client_for, setup_server};
use httpmock::Method::GET;
use tdameritrade_rs::TdError;

const FUNDAMENTALS_BODY: &str = r#"{
  "AAPL": {
    "fundamental": {
      "symbol": "AAPL",
      "high52": 182.94,
      "low52": 124.17,
      "dividendAmount": 0.92,
      "dividendYield": 0.55,
      "peRatio": 28.1,
      "pegRatio": 2.6,
      "pbRatio": 43.7,
      "grossMarginTTM": 43.9,
      "netProfitMarginTTM": 25.3,
      "operatingMarginTTM": 29.8,
      "returnOnEquity": 145.6,
      "returnOnAssets": 27.5,
      "epsTTM": 6.13,
      "epsChangePercentTTM": 8.8,
      "sharesOutstanding": 15821900000.0,
      "marketCap": 2725000000000.0
    },
    "cusip": "037833100",
    "symbol": "AAPL",
    "description": "Apple Inc. - Common Stock",
    "exchange": "NASDAQ",
    "assetType": "EQUITY"
  }
}"#;

#[tokio::test]
async fn fundamentals_decode_the_symbol_entry() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/instruments")
            .query_param("symbol", "AAPL")
            .query_param("projection", "fundamental");
        then.status(200)
            .header("content-type", "application/json")
            .body(FUNDAMENTALS_BODY);
    });

    let client = client_for(&server);
    let info = client.get_instrument_fundamentals("AAPL").await.unwrap();

    mock.assert();
    assert_eq!(info.symbol, "AAPL");
    assert_eq!(info.cusip.as_deref(), Some("037833100"));
    assert_eq!(info.exchange.as_deref(), Some("NASDAQ"));
    assert_eq!(info.fundamental.high52, Some(182.94));
    assert_eq!(info.fundamental.pe_ratio, Some(28.1));
    assert_eq!(info.fundamental.eps_ttm, Some(6.13));
    assert_eq!(info.fundamental.market_cap, Some(2_725_000_000_000.0));
}

#[tokio::test]
async fn missing_symbol_entry_is_a_data_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/instruments");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    let client = client_for(&server);
    let err = client.get_instrument_fundamentals("ZZZZ").await.unwrap_err();

    match err {
        TdError::Data(msg) => assert!(msg.contains("ZZZZ")),
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn fundamentals_return_status_error_on_non_2xx() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/instruments");
        then.status(401).body("unauthorized");
    });

    let client = client_for(&server);
    let err = client.get_instrument_fundamentals("AAPL").await.unwrap_err();

    match err {
        TdError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "unauthorized");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
