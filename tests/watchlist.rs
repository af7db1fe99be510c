mod common;

use common::{client_for, setup_server};
use httpmock::Method::{GET, PATCH, POST, PUT};
use tdameritrade_rs::TdError;

const WATCHLISTS_BODY: &str = r#"[
  {
    "name": "tech",
    "watchlistId": "123",
    "accountId": "987654321",
    "watchlistItems": [
      { "sequenceId": 1, "quantity": 0.0, "instrument": { "symbol": "AAPL", "assetType": "EQUITY" } },
      { "sequenceId": 2, "quantity": 0.0, "instrument": { "symbol": "MSFT", "assetType": "EQUITY" } }
    ]
  }
]"#;

#[tokio::test]
async fn listing_watchlists_decodes_items() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/accounts/987654321/watchlists");
        then.status(200)
            .header("content-type", "application/json")
            .body(WATCHLISTS_BODY);
    });

    let client = client_for(&server);
    let lists = client.get_watchlists("987654321").await.unwrap();

    mock.assert();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "tech");
    assert_eq!(lists[0].watchlist_id, "123");
    assert_eq!(lists[0].account_id, "987654321");
    let symbols: Vec<_> = lists[0].items.iter().map(|i| i.symbol.as_str()).collect();
    assert_eq!(symbols, ["AAPL", "MSFT"]);
}

#[tokio::test]
async fn creating_a_watchlist_posts_equity_items() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/accounts/987654321/watchlists")
            .json_body(serde_json::json!({
                "name": "tech",
                "watchlistItems": [
                    { "instrument": { "symbol": "AAPL", "assetType": "EQUITY" } },
                    { "instrument": { "symbol": "MSFT", "assetType": "EQUITY" } }
                ]
            }));
        then.status(201);
    });

    let client = client_for(&server);
    client
        .create_watchlist("987654321", "tech", ["AAPL", "MSFT"])
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn replacing_a_watchlist_puts_to_its_id() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/v1/accounts/987654321/watchlists/123");
        then.status(204);
    });

    let client = client_for(&server);
    client
        .replace_watchlist("987654321", "123", "tech-v2", ["NVDA"])
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn updating_a_watchlist_patches_to_its_id() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(PATCH).path("/v1/accounts/987654321/watchlists/123");
        then.status(204);
    });

    let client = client_for(&server);
    client
        .update_watchlist("987654321", "123", "tech", ["AMD"])
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn create_failure_carries_status_and_body() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/v1/accounts/987654321/watchlists");
        then.status(400).body("watchlist name already in use");
    });

    let client = client_for(&server);
    let err = client
        .create_watchlist("987654321", "tech", ["AAPL"])
        .await
        .unwrap_err();

    match err {
        TdError::Status { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("already in use"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
