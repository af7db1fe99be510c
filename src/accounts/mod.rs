//! Legacy account services.
//!
//! Transaction history, positions and balances still ride the old XML
//! services: GET with a `JSESSIONID` session cookie, a fixed 10-second
//! timeout, and an `<amtd>` envelope whose `result` child reports success.
//! An envelope with a non-OK `result` on HTTP 200 surfaces as
//! [`TdError::Upstream`].

mod model;
mod wire;

pub use model::{Balances, Position, Transaction};

use chrono::NaiveDate;
use url::Url;

use crate::core::wire::{coerce_int, parse_f64};
use crate::core::{TdClient, TdError};

/* ---------------- Shared envelope handling ---------------- */

async fn fetch_envelope(client: &TdClient, url: Url) -> Result<wire::Amtd, TdError> {
    let resp = client.legacy_get(url).await?;
    let body = crate::core::net::read_body(resp).await?;
    let envelope: wire::Amtd = quick_xml::de::from_str(&body)?;
    let result = envelope.result.clone().unwrap_or_default();
    if result != "OK" {
        return Err(TdError::Upstream { result });
    }
    Ok(envelope)
}

fn append_source(client: &TdClient, url: &mut Url) {
    if let Some(source) = client.source_id() {
        url.query_pairs_mut().append_pair("source", source);
    }
}

fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

fn balances_and_positions_url(
    client: &TdClient,
    account_id: &str,
    suppress_quotes: Option<bool>,
    alt_balance_format: Option<bool>,
) -> Url {
    let mut url = client.balances_and_positions_url().clone();
    append_source(client, &mut url);
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("accountid", account_id);
        if let Some(b) = suppress_quotes {
            qp.append_pair("suppressquotes", bool_str(b));
        }
        if let Some(b) = alt_balance_format {
            qp.append_pair("altbalanceformat", bool_str(b));
        }
    }
    url
}

/* ---------------- Transaction history ---------------- */

/// Builder for a transaction-history request.
pub struct TransactionHistoryBuilder {
    client: TdClient,
    account_id: String,
    start: NaiveDate,
    end: NaiveDate,
    transaction_type: String,
}

impl TransactionHistoryBuilder {
    pub fn new(
        client: &TdClient,
        account_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        transaction_type: impl Into<String>,
    ) -> Self {
        Self {
            client: client.clone(),
            account_id: account_id.into(),
            start,
            end,
            transaction_type: transaction_type.into(),
        }
    }

    /// Execute the request and decode the envelope's `history` payload.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::InvalidDates`] when the range is inverted, and the
    /// usual transport/status/envelope errors otherwise.
    pub async fn fetch(self) -> Result<Vec<Transaction>, TdError> {
        if self.start > self.end {
            return Err(TdError::InvalidDates);
        }

        let mut url = self.client.history_url().clone();
        append_source(&self.client, &mut url);
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("accountid", &self.account_id);
            qp.append_pair("startdate", &self.start.format("%Y%m%d").to_string());
            qp.append_pair("enddate", &self.end.format("%Y%m%d").to_string());
            qp.append_pair("type", &self.transaction_type);
        }

        let envelope = fetch_envelope(&self.client, url).await?;
        let history = envelope
            .history
            .ok_or_else(|| TdError::Data("history element missing".into()))?;

        Ok(history
            .transaction_list
            .map(|list| list.transactions)
            .unwrap_or_default()
            .into_iter()
            .map(map_transaction)
            .collect())
    }
}

fn map_transaction(n: wire::TransactionNode) -> Transaction {
    Transaction {
        id: n.id,
        transaction_type: n.kind,
        symbol: n.symbol,
        description: n.description,
        quantity: parse_f64(n.quantity),
        price: parse_f64(n.price),
        amount: parse_f64(n.amount),
        executed_date: n.executed_date,
        settled_date: n.settled_date,
    }
}

/* ---------------- Positions ---------------- */

/// Builder for a positions request.
pub struct PositionsBuilder {
    client: TdClient,
    account_id: String,
    suppress_quotes: Option<bool>,
    alt_balance_format: Option<bool>,
}

impl PositionsBuilder {
    pub fn new(client: &TdClient, account_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            account_id: account_id.into(),
            suppress_quotes: None,
            alt_balance_format: None,
        }
    }

    /// Suppress quotes on the returned positions.
    #[must_use]
    pub const fn suppress_quotes(mut self, b: bool) -> Self {
        self.suppress_quotes = Some(b);
        self
    }

    /// Request the alternative balance format.
    #[must_use]
    pub const fn alt_balance_format(mut self, b: bool) -> Self {
        self.alt_balance_format = Some(b);
        self
    }

    /// Execute the request and decode the envelope's `positions` payload.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails or the envelope reports a
    /// non-OK result.
    pub async fn fetch(self) -> Result<Vec<Position>, TdError> {
        let url = balances_and_positions_url(
            &self.client,
            &self.account_id,
            self.suppress_quotes,
            self.alt_balance_format,
        );

        let envelope = fetch_envelope(&self.client, url).await?;
        let positions = envelope
            .positions
            .ok_or_else(|| TdError::Data("positions element missing".into()))?;

        Ok(positions.positions.into_iter().map(map_position).collect())
    }
}

fn map_position(n: wire::PositionNode) -> Position {
    Position {
        symbol: n.symbol.unwrap_or_default(),
        description: n.description,
        quantity: parse_f64(n.quantity),
        account_type: n.account_type,
        close_price: parse_f64(n.close_price),
        current_value: parse_f64(n.current_value),
        cost_basis: parse_f64(n.cost_basis),
    }
}

/* ---------------- Balances ---------------- */

/// Builder for a balances request.
pub struct BalancesBuilder {
    client: TdClient,
    account_id: String,
    suppress_quotes: Option<bool>,
    alt_balance_format: Option<bool>,
}

impl BalancesBuilder {
    pub fn new(client: &TdClient, account_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            account_id: account_id.into(),
            suppress_quotes: None,
            alt_balance_format: None,
        }
    }

    /// Suppress quotes on the positions side of the response.
    #[must_use]
    pub const fn suppress_quotes(mut self, b: bool) -> Self {
        self.suppress_quotes = Some(b);
        self
    }

    /// Request the alternative balance format.
    #[must_use]
    pub const fn alt_balance_format(mut self, b: bool) -> Self {
        self.alt_balance_format = Some(b);
        self
    }

    /// Execute the request and decode the envelope's `balance` payload.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails, the envelope reports a non-OK
    /// result, or a required balance element is missing.
    pub async fn fetch(self) -> Result<Balances, TdError> {
        let url = balances_and_positions_url(
            &self.client,
            &self.account_id,
            self.suppress_quotes,
            self.alt_balance_format,
        );

        let envelope = fetch_envelope(&self.client, url).await?;
        let balance = envelope
            .balance
            .ok_or_else(|| TdError::Data("balance element missing".into()))?;

        let cash = balance
            .cash_balance
            .and_then(|n| n.current)
            .ok_or_else(|| TdError::Data("cash_balance missing from envelope".into()))?;
        let money_market = balance
            .money_market_balance
            .and_then(|n| n.current)
            .ok_or_else(|| TdError::Data("money_market_balance missing from envelope".into()))?;
        let margin = balance.margin_balance.and_then(|n| n.current);

        Ok(Balances {
            cash_balance: coerce_int(&cash),
            money_market_balance: coerce_int(&money_market),
            margin_balance: margin.map(|s| coerce_int(&s)).unwrap_or(0),
        })
    }
}
