use serde::Serialize;

/// A saved watchlist under an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Watchlist {
    pub watchlist_id: String,
    pub account_id: String,
    pub name: String,
    pub items: Vec<WatchlistItem>,
}

/// One entry of a watchlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchlistItem {
    pub sequence_id: Option<u32>,
    pub quantity: Option<f64>,
    pub symbol: String,
    pub asset_type: Option<String>,
}
