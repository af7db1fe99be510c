mod common;

use common::{builder_for, setup_server};
use httpmock::Method::{GET, POST};
use tdameritrade_rs::TdError;

#[tokio::test]
async fn refresh_grant_stores_the_new_access_token() {
    let server = setup_server();
    let token_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/oauth2/token")
            .body("grant_type=refresh_token&refresh_token=refresh-1&client_id=test-client-id");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{ "access_token": "new-access-token", "refresh_token": "refresh-2", "token_type": "Bearer", "expires_in": 1800 }"#);
    });

    let client = builder_for(&server).refresh_token("refresh-1").build().unwrap();
    client.refresh_access_token().await.unwrap();

    token_mock.assert();
    assert_eq!(client.access_token().await.as_deref(), Some("new-access-token"));
    assert_eq!(client.refresh_token().await.as_deref(), Some("refresh-2"));
}

#[tokio::test]
async fn modern_calls_refresh_once_when_only_a_refresh_token_is_seeded() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/v1/oauth2/token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{ "access_token": "new-access-token" }"#);
    });
    let quotes_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/marketdata/quotes")
            .header("authorization", "Bearer new-access-token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{ "AAPL": { "symbol": "AAPL", "lastPrice": 172.2 } }"#);
    });

    let client = builder_for(&server).refresh_token("refresh-1").build().unwrap();
    let quotes = client.get_quotes(["AAPL"]).await.unwrap();

    quotes_mock.assert();
    assert_eq!(quotes["AAPL"].last_price, Some(172.2));
}

#[tokio::test]
async fn modern_calls_without_any_token_fail_before_any_request() {
    let server = setup_server();
    let client = builder_for(&server).build().unwrap();

    let err = client.get_quotes(["AAPL"]).await.unwrap_err();
    match err {
        TdError::Auth(msg) => assert!(msg.contains("access token")),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn refresh_without_a_refresh_token_is_an_auth_error() {
    let server = setup_server();
    let client = builder_for(&server).build().unwrap();

    let err = client.refresh_access_token().await.unwrap_err();
    assert!(matches!(err, TdError::Auth(_)));
}

#[tokio::test]
async fn failed_refresh_carries_status_and_body() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/v1/oauth2/token");
        then.status(400).body(r#"{ "error": "invalid_grant" }"#);
    });

    let client = builder_for(&server).refresh_token("stale").build().unwrap();
    let err = client.refresh_access_token().await.unwrap_err();

    match err {
        TdError::Status { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
