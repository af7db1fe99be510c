use serde::{Deserialize, Serialize};

/* ---------------- Inbound ---------------- */

#[derive(Deserialize)]
pub(super) struct WatchlistNode {
    pub name: Option<String>,
    #[serde(rename = "watchlistId")]
    pub watchlist_id: Option<String>,
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
    #[serde(rename = "watchlistItems")]
    pub watchlist_items: Option<Vec<ItemNode>>,
}

#[derive(Deserialize)]
pub(super) struct ItemNode {
    #[serde(rename = "sequenceId")]
    pub sequence_id: Option<u32>,
    pub quantity: Option<f64>,
    pub instrument: Option<InstrumentNode>,
}

#[derive(Deserialize)]
pub(super) struct InstrumentNode {
    pub symbol: Option<String>,
    #[serde(rename = "assetType")]
    pub asset_type: Option<String>,
}

/* ---------------- Outbound ---------------- */

#[derive(Serialize)]
pub(super) struct WatchlistBody {
    pub name: String,
    #[serde(rename = "watchlistItems")]
    pub watchlist_items: Vec<NewItem>,
}

#[derive(Serialize)]
pub(super) struct NewItem {
    pub instrument: NewInstrument,
}

#[derive(Serialize)]
pub(super) struct NewInstrument {
    pub symbol: String,
    #[serde(rename = "assetType")]
    pub asset_type: &'static str,
}

impl WatchlistBody {
    /// Equity-only items, the shape the watchlist endpoints accept.
    pub(super) fn equities(name: &str, symbols: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            watchlist_items: symbols
                .into_iter()
                .map(|symbol| NewItem {
                    instrument: NewInstrument {
                        symbol,
                        asset_type: "EQUITY",
                    },
                })
                .collect(),
        }
    }
}
