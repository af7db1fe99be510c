#![allow(dead_code)]

use httpmock::MockServer;
use tdameritrade_rs::{TdClient, TdClientBuilder};
use url::Url;

pub const CLIENT_ID: &str = "test-client-id";
pub const REDIRECT_URI: &str = "https://localhost/callback";
pub const ACCESS_TOKEN: &str = "test-access-token";
pub const SESSION_ID: &str = "SESSION42";
pub const SOURCE_ID: &str = "TEST";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A builder pointed at the mock server, with credentials seeded.
pub fn builder_for(server: &MockServer) -> TdClientBuilder {
    TdClient::builder()
        .client_id(CLIENT_ID)
        .redirect_uri(REDIRECT_URI)
        .source_id(SOURCE_ID)
        .base_api(Url::parse(&format!("{}/v1/", server.base_url())).unwrap())
        .token_url(Url::parse(&format!("{}/v1/oauth2/token", server.base_url())).unwrap())
        .history_url(Url::parse(&format!("{}/apps/100/History", server.base_url())).unwrap())
        .balances_and_positions_url(
            Url::parse(&format!("{}/apps/100/BalancesAndPositions", server.base_url())).unwrap(),
        )
}

/// A ready client with an access token and a legacy session id.
pub fn client_for(server: &MockServer) -> TdClient {
    builder_for(server)
        .access_token(ACCESS_TOKEN)
        .session_id(SESSION_ID)
        .build()
        .unwrap()
}

/// Wrap a legacy payload in a successful `<amtd>` envelope.
pub fn amtd_ok(payload: &str) -> String {
    format!("<amtd><result>OK</result>{payload}</amtd>")
}
