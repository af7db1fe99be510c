use std::collections::HashMap;

use crate::core::{TdClient, TdError};

use super::wire::{FundamentalNode, InstrumentNode};
use super::{Fundamental, InstrumentFundamentals};

pub(super) async fn fetch_fundamentals(
    client: &TdClient,
    symbol: &str,
) -> Result<InstrumentFundamentals, TdError> {
    let token = client.ensure_access_token().await?;

    let mut url = client.base_api().join("instruments")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("projection", "fundamental");

    let resp = client
        .http()
        .get(url)
        .bearer_auth(&token)
        .header("accept", "application/json")
        .send()
        .await?;

    let body = crate::core::net::read_body(resp).await?;
    let mut nodes: HashMap<String, InstrumentNode> =
        serde_json::from_str(&body).map_err(TdError::Json)?;

    let node = nodes
        .remove(symbol)
        .ok_or_else(|| TdError::Data(format!("no instrument data for symbol {symbol}")))?;

    Ok(map_node(symbol, node))
}

fn map_node(symbol: &str, n: InstrumentNode) -> InstrumentFundamentals {
    InstrumentFundamentals {
        symbol: n.symbol.unwrap_or_else(|| symbol.to_string()),
        cusip: n.cusip,
        description: n.description,
        exchange: n.exchange,
        asset_type: n.asset_type,
        fundamental: n.fundamental.map(map_fundamental).unwrap_or_default(),
    }
}

fn map_fundamental(n: FundamentalNode) -> Fundamental {
    Fundamental {
        high52: n.high52,
        low52: n.low52,
        dividend_amount: n.dividend_amount,
        dividend_yield: n.dividend_yield,
        pe_ratio: n.pe_ratio,
        peg_ratio: n.peg_ratio,
        pb_ratio: n.pb_ratio,
        gross_margin_ttm: n.gross_margin_ttm,
        net_profit_margin_ttm: n.net_profit_margin_ttm,
        operating_margin_ttm: n.operating_margin_ttm,
        return_on_equity: n.return_on_equity,
        return_on_assets: n.return_on_assets,
        eps_ttm: n.eps_ttm,
        eps_change_percent_ttm: n.eps_change_percent_ttm,
        shares_outstanding: n.shares_outstanding,
        market_cap: n.market_cap,
    }
}
