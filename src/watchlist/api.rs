use url::Url;

use crate::core::{TdClient, TdError};

use super::wire::{WatchlistBody, WatchlistNode};
use super::{Watchlist, WatchlistItem};

fn watchlists_url(client: &TdClient, account_id: &str) -> Result<Url, TdError> {
    Ok(client
        .base_api()
        .join(&format!("accounts/{account_id}/watchlists"))?)
}

fn watchlist_url(client: &TdClient, account_id: &str, watchlist_id: &str) -> Result<Url, TdError> {
    Ok(client
        .base_api()
        .join(&format!("accounts/{account_id}/watchlists/{watchlist_id}"))?)
}

pub(super) async fn create(
    client: &TdClient,
    account_id: &str,
    name: &str,
    symbols: Vec<String>,
) -> Result<(), TdError> {
    let token = client.ensure_access_token().await?;
    let resp = client
        .http()
        .post(watchlists_url(client, account_id)?)
        .bearer_auth(&token)
        .json(&WatchlistBody::equities(name, symbols))
        .send()
        .await?;
    crate::core::net::read_body(resp).await?;
    Ok(())
}

pub(super) async fn list(client: &TdClient, account_id: &str) -> Result<Vec<Watchlist>, TdError> {
    let token = client.ensure_access_token().await?;
    let resp = client
        .http()
        .get(watchlists_url(client, account_id)?)
        .bearer_auth(&token)
        .header("accept", "application/json")
        .send()
        .await?;

    let body = crate::core::net::read_body(resp).await?;
    let nodes: Vec<WatchlistNode> = serde_json::from_str(&body).map_err(TdError::Json)?;
    Ok(nodes
        .into_iter()
        .map(|n| map_node(account_id, n))
        .collect())
}

pub(super) async fn replace(
    client: &TdClient,
    account_id: &str,
    watchlist_id: &str,
    name: &str,
    symbols: Vec<String>,
) -> Result<(), TdError> {
    let token = client.ensure_access_token().await?;
    let resp = client
        .http()
        .put(watchlist_url(client, account_id, watchlist_id)?)
        .bearer_auth(&token)
        .json(&WatchlistBody::equities(name, symbols))
        .send()
        .await?;
    crate::core::net::read_body(resp).await?;
    Ok(())
}

pub(super) async fn update(
    client: &TdClient,
    account_id: &str,
    watchlist_id: &str,
    name: &str,
    symbols: Vec<String>,
) -> Result<(), TdError> {
    let token = client.ensure_access_token().await?;
    let resp = client
        .http()
        .patch(watchlist_url(client, account_id, watchlist_id)?)
        .bearer_auth(&token)
        .json(&WatchlistBody::equities(name, symbols))
        .send()
        .await?;
    crate::core::net::read_body(resp).await?;
    Ok(())
}

fn map_node(account_id: &str, n: WatchlistNode) -> Watchlist {
    Watchlist {
        watchlist_id: n.watchlist_id.unwrap_or_default(),
        account_id: n.account_id.unwrap_or_else(|| account_id.to_string()),
        name: n.name.unwrap_or_default(),
        items: n
            .watchlist_items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                let instrument = item.instrument;
                WatchlistItem {
                    sequence_id: item.sequence_id,
                    quantity: item.quantity,
                    symbol: instrument
                        .as_ref()
                        .and_then(|i| i.symbol.clone())
                        .unwrap_or_default(),
                    asset_type: instrument.and_then(|i| i.asset_type),
                }
            })
            .collect(),
    }
}
