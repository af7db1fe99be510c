//! Public client surface + builder.
//! Internals are split into `auth` (token/session state) and `constants`
//! (default endpoints + timeouts).

mod auth;
mod constants;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use auth::SessionState;
use chrono::NaiveDate;
use constants::{
    DEFAULT_BALANCES_AND_POSITIONS_URL, DEFAULT_BASE_API, DEFAULT_HISTORY_URL, DEFAULT_TOKEN_URL,
    LEGACY_TIMEOUT,
};
use reqwest::Client;
use reqwest::header::COOKIE;
use tokio::sync::RwLock;
use url::Url;

use crate::accounts::{
    Balances, BalancesBuilder, Position, PositionsBuilder, Transaction, TransactionHistoryBuilder,
};
use crate::core::TdError;
use crate::fundamentals::{FundamentalsBuilder, InstrumentFundamentals};
use crate::history::{PriceHistory, PriceHistoryBuilder};
use crate::quote::{Quote, QuotesBuilder};
use crate::watchlist::{self, Watchlist};

/// The brokerage API client.
///
/// Holds the identifying credentials (`client_id`, `redirect_uri`), the
/// resolved endpoint URLs, and the token/session state shared by all calls.
/// Cloning is cheap; clones share the same token/session state.
#[derive(Debug, Clone)]
pub struct TdClient {
    http: Client,
    client_id: String,
    redirect_uri: String,
    source_id: Option<String>,

    base_api: Url,
    token_url: Url,
    history_url: Url,
    balances_and_positions_url: Url,

    session: Arc<RwLock<SessionState>>,
}

impl TdClient {
    /// Create a new builder.
    pub fn builder() -> TdClientBuilder {
        TdClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn client_id(&self) -> &str {
        &self.client_id
    }
    pub(crate) fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
    pub(crate) fn base_api(&self) -> &Url {
        &self.base_api
    }
    pub(crate) fn token_url(&self) -> &Url {
        &self.token_url
    }
    pub(crate) fn history_url(&self) -> &Url {
        &self.history_url
    }
    pub(crate) fn balances_and_positions_url(&self) -> &Url {
        &self.balances_and_positions_url
    }

    /// The redirect URI registered with the app credentials.
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Issue a GET against a legacy service: session cookie auth and the
    /// fixed legacy timeout. Fails before the request when no session id is
    /// stored.
    pub(crate) async fn legacy_get(&self, url: Url) -> Result<reqwest::Response, TdError> {
        let session_id = self.ensure_session_id().await?;
        Ok(self
            .http
            .get(url)
            .header(COOKIE, format!("JSESSIONID={session_id}"))
            .timeout(LEGACY_TIMEOUT)
            .send()
            .await?)
    }

    /* ---------------- Call facade ---------------- */

    /// Fetch a batch of quotes in a single request, keyed by symbol.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if no symbol is given, the request fails, or the
    /// response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols), err))]
    pub async fn get_quotes<I, S>(&self, symbols: I) -> Result<HashMap<String, Quote>, TdError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QuotesBuilder::new(self).symbols(symbols).fetch().await
    }

    /// Start a price-history request for `symbol`; options go on the builder.
    pub fn price_history(&self, symbol: impl Into<String>) -> PriceHistoryBuilder {
        PriceHistoryBuilder::new(self, symbol)
    }

    /// Fetch price history for `symbol` with the upstream default window.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_price_history(&self, symbol: &str) -> Result<PriceHistory, TdError> {
        self.price_history(symbol).fetch().await
    }

    /// Fetch the fundamentals block for a single instrument.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails or the symbol is absent from
    /// the response.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_instrument_fundamentals(
        &self,
        symbol: &str,
    ) -> Result<InstrumentFundamentals, TdError> {
        FundamentalsBuilder::new(self, symbol).fetch().await
    }

    /// Create a watchlist of equity symbols under an account.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols), err))]
    pub async fn create_watchlist<I, S>(
        &self,
        account_id: &str,
        name: &str,
        symbols: I,
    ) -> Result<(), TdError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        watchlist::create(self, account_id, name, symbols).await
    }

    /// Fetch all watchlists of an account.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_watchlists(&self, account_id: &str) -> Result<Vec<Watchlist>, TdError> {
        watchlist::list(self, account_id).await
    }

    /// Replace a watchlist wholesale: name and contents.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols), err))]
    pub async fn replace_watchlist<I, S>(
        &self,
        account_id: &str,
        watchlist_id: &str,
        name: &str,
        symbols: I,
    ) -> Result<(), TdError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        watchlist::replace(self, account_id, watchlist_id, name, symbols).await
    }

    /// Partially update a watchlist: rename it and/or append symbols.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols), err))]
    pub async fn update_watchlist<I, S>(
        &self,
        account_id: &str,
        watchlist_id: &str,
        name: &str,
        symbols: I,
    ) -> Result<(), TdError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        watchlist::update(self, account_id, watchlist_id, name, symbols).await
    }

    /// Fetch transaction history for an account over a date range.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::InvalidDates`] when `start` is after `end`, and the
    /// usual transport/status/envelope errors otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_transaction_history(
        &self,
        account_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        transaction_type: &str,
    ) -> Result<Vec<Transaction>, TdError> {
        TransactionHistoryBuilder::new(self, account_id, start, end, transaction_type)
            .fetch()
            .await
    }

    /// Start a positions request for an account; options go on the builder.
    pub fn positions(&self, account_id: impl Into<String>) -> PositionsBuilder {
        PositionsBuilder::new(self, account_id)
    }

    /// Fetch the open positions of an account.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails or the envelope reports a
    /// non-OK result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_positions(&self, account_id: &str) -> Result<Vec<Position>, TdError> {
        self.positions(account_id).fetch().await
    }

    /// Start a balances request for an account; options go on the builder.
    pub fn balances(&self, account_id: impl Into<String>) -> BalancesBuilder {
        BalancesBuilder::new(self, account_id)
    }

    /// Fetch the cash/money-market/margin balances of an account.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails or the envelope reports a
    /// non-OK result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_balances(&self, account_id: &str) -> Result<Balances, TdError> {
        self.balances(account_id).fetch().await
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`TdClient`].
///
/// `client_id` and `redirect_uri` are required; [`build`](Self::build) fails
/// fast with [`TdError::Config`] when either is missing. Everything else has
/// a default.
#[derive(Default)]
pub struct TdClientBuilder {
    client_id: Option<String>,
    redirect_uri: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    session_id: Option<String>,
    source_id: Option<String>,

    base_api: Option<Url>,
    token_url: Option<Url>,
    history_url: Option<Url>,
    balances_and_positions_url: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl TdClientBuilder {
    /// Set the OAuth application client id. Required.
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Set the redirect URI registered with the app credentials. Required.
    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    /// Seed the bearer access token used by the JSON endpoints.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Seed the refresh token used to obtain new access tokens.
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Seed the `JSESSIONID` session id used by the legacy services.
    pub fn session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }

    /// Set the `source` id sent to the legacy services.
    pub fn source_id(mut self, id: impl Into<String>) -> Self {
        self.source_id = Some(id.into());
        self
    }

    /// Override the JSON API root (e.g. `https://api.tdameritrade.com/v1/`).
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// Override the OAuth2 token endpoint.
    pub fn token_url(mut self, url: Url) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Override the legacy transaction-history service URL.
    pub fn history_url(mut self, url: Url) -> Self {
        self.history_url = Some(url);
        self
    }

    /// Override the legacy balances-and-positions service URL.
    pub fn balances_and_positions_url(mut self, url: Url) -> Self {
        self.balances_and_positions_url = Some(url);
        self
    }

    /// Set a global request timeout. Default: none (the legacy services
    /// always use their own fixed timeout).
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::Config`] when `client_id` or `redirect_uri` is
    /// missing, [`TdError::Url`] when a default endpoint fails to parse, and
    /// [`TdError::Http`] when the HTTP client cannot be constructed.
    pub fn build(self) -> Result<TdClient, TdError> {
        let client_id = self
            .client_id
            .ok_or_else(|| TdError::Config("client_id is required".into()))?;
        let redirect_uri = self
            .redirect_uri
            .ok_or_else(|| TdError::Config("redirect_uri is required".into()))?;

        let base_api = match self.base_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_API)?,
        };
        let token_url = match self.token_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_TOKEN_URL)?,
        };
        let history_url = match self.history_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_HISTORY_URL)?,
        };
        let balances_and_positions_url = match self.balances_and_positions_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BALANCES_AND_POSITIONS_URL)?,
        };

        let mut httpb = reqwest::Client::builder();
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        Ok(TdClient {
            http,
            client_id,
            redirect_uri,
            source_id: self.source_id,
            base_api,
            token_url,
            history_url,
            balances_and_positions_url,
            session: Arc::new(RwLock::new(SessionState {
                access_token: self.access_token,
                refresh_token: self.refresh_token,
                session_id: self.session_id,
            })),
        })
    }
}
