use tdameritrade_rs::{TdClient, TdError};

#[test]
fn building_without_client_id_fails_fast() {
    let err = TdClient::builder()
        .redirect_uri("https://localhost/callback")
        .build()
        .unwrap_err();

    match err {
        TdError::Config(msg) => assert!(msg.contains("client_id")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn building_without_redirect_uri_fails_fast() {
    let err = TdClient::builder()
        .client_id("test-client-id")
        .build()
        .unwrap_err();

    match err {
        TdError::Config(msg) => assert!(msg.contains("redirect_uri")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn defaults_are_enough_once_required_fields_are_set() {
    let client = TdClient::builder()
        .client_id("test-client-id")
        .redirect_uri("https://localhost/callback")
        .build()
        .unwrap();

    assert_eq!(client.redirect_uri(), "https://localhost/callback");
}
