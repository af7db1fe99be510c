mod api;
mod model;
mod wire;

pub use model::{Watchlist, WatchlistItem};

use crate::core::{TdClient, TdError};

/// Create a watchlist of equity symbols under an account.
///
/// # Errors
///
/// Returns `TdError` if the request fails.
pub async fn create<I, S>(
    client: &TdClient,
    account_id: &str,
    name: &str,
    symbols: I,
) -> Result<(), TdError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    api::create(client, account_id, name, collect(symbols)).await
}

/// Fetch all watchlists of an account.
///
/// # Errors
///
/// Returns `TdError` if the request fails or the response cannot be parsed.
pub async fn list(client: &TdClient, account_id: &str) -> Result<Vec<Watchlist>, TdError> {
    api::list(client, account_id).await
}

/// Replace a watchlist wholesale: name and contents.
///
/// # Errors
///
/// Returns `TdError` if the request fails.
pub async fn replace<I, S>(
    client: &TdClient,
    account_id: &str,
    watchlist_id: &str,
    name: &str,
    symbols: I,
) -> Result<(), TdError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    api::replace(client, account_id, watchlist_id, name, collect(symbols)).await
}

/// Partially update a watchlist: rename it and/or append symbols.
///
/// # Errors
///
/// Returns `TdError` if the request fails.
pub async fn update<I, S>(
    client: &TdClient,
    account_id: &str,
    watchlist_id: &str,
    name: &str,
    symbols: I,
) -> Result<(), TdError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    api::update(client, account_id, watchlist_id, name, collect(symbols)).await
}

fn collect<I, S>(symbols: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    symbols.into_iter().map(Into::into).collect()
}
