use std::collections::HashMap;

use serde::Deserialize;

use crate::core::{TdClient, TdError};

/* ---------------- Public API ---------------- */

/// Fetch a batch of quotes for multiple symbols in a single request.
///
/// # Errors
///
/// Returns `TdError` if no symbol is given, the request fails, or the
/// response cannot be parsed.
pub async fn quotes<I, S>(client: &TdClient, symbols: I) -> Result<HashMap<String, Quote>, TdError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    QuotesBuilder::new(client).symbols(symbols).fetch().await
}

/// A quote snapshot for a single symbol.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Quote {
    pub symbol: String,
    pub description: Option<String>,
    pub bid_price: Option<f64>,
    pub ask_price: Option<f64>,
    pub last_price: Option<f64>,
    pub open_price: Option<f64>,
    pub high_price: Option<f64>,
    pub low_price: Option<f64>,
    pub close_price: Option<f64>,
    pub net_change: Option<f64>,
    pub total_volume: Option<u64>,
    pub exchange: Option<String>,
    pub asset_type: Option<String>,
}

/// Builder for batch quote snapshots.
pub struct QuotesBuilder {
    client: TdClient,
    symbols: Vec<String>,
}

impl QuotesBuilder {
    pub fn new(client: &TdClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
        }
    }

    /// Set the symbols to query.
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single symbol.
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Execute the request and return one [`Quote`] per symbol found,
    /// keyed the way the upstream response is keyed.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if no symbol is given, the request fails, or the
    /// response cannot be parsed.
    pub async fn fetch(self) -> Result<HashMap<String, Quote>, TdError> {
        if self.symbols.is_empty() {
            return Err(TdError::Data("quotes: at least one symbol required".into()));
        }

        let token = self.client.ensure_access_token().await?;

        let mut url = self.client.base_api().join("marketdata/quotes")?;
        url.query_pairs_mut()
            .append_pair("symbol", &self.symbols.join(","));

        let resp = self
            .client
            .http()
            .get(url)
            .bearer_auth(&token)
            .header("accept", "application/json")
            .send()
            .await?;

        let body = crate::core::net::read_body(resp).await?;
        parse_quotes(&body)
    }
}

/* ---------------- Internal helpers ---------------- */

fn parse_quotes(body: &str) -> Result<HashMap<String, Quote>, TdError> {
    let nodes: HashMap<String, QuoteNode> =
        serde_json::from_str(body).map_err(|e| TdError::Data(format!("quote json parse: {e}")))?;

    Ok(nodes
        .into_iter()
        .map(|(key, n)| {
            let quote = map_node(&key, n);
            (key, quote)
        })
        .collect())
}

fn map_node(key: &str, n: QuoteNode) -> Quote {
    Quote {
        symbol: n.symbol.unwrap_or_else(|| key.to_string()),
        description: n.description,
        bid_price: n.bid_price,
        ask_price: n.ask_price,
        last_price: n.last_price,
        open_price: n.open_price,
        high_price: n.high_price,
        low_price: n.low_price,
        close_price: n.close_price,
        net_change: n.net_change,
        total_volume: n.total_volume,
        exchange: n.exchange_name.or(n.exchange),
        asset_type: n.asset_type,
    }
}

/* ---------------- Minimal serde for the quotes endpoint ---------------- */

#[derive(Deserialize)]
struct QuoteNode {
    symbol: Option<String>,
    description: Option<String>,
    #[serde(rename = "bidPrice")]
    bid_price: Option<f64>,
    #[serde(rename = "askPrice")]
    ask_price: Option<f64>,
    #[serde(rename = "lastPrice")]
    last_price: Option<f64>,
    #[serde(rename = "openPrice")]
    open_price: Option<f64>,
    #[serde(rename = "highPrice")]
    high_price: Option<f64>,
    #[serde(rename = "lowPrice")]
    low_price: Option<f64>,
    #[serde(rename = "closePrice")]
    close_price: Option<f64>,
    #[serde(rename = "netChange")]
    net_change: Option<f64>,
    #[serde(rename = "totalVolume")]
    total_volume: Option<u64>,
    #[serde(rename = "exchangeName")]
    exchange_name: Option<String>,
    exchange: Option<String>,
    #[serde(rename = "assetType")]
    asset_type: Option<String>,
}
