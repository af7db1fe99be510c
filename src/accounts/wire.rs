use serde::Deserialize;

/// The legacy envelope: every service wraps its payload in `<amtd>` with a
/// `result` status child and one payload element.
#[derive(Deserialize)]
pub(super) struct Amtd {
    pub result: Option<String>,
    pub history: Option<HistoryNode>,
    pub positions: Option<PositionsNode>,
    pub balance: Option<BalanceNode>,
}

/* ---------------- History ---------------- */

#[derive(Deserialize)]
pub(super) struct HistoryNode {
    pub transaction_list: Option<TransactionListNode>,
}

#[derive(Deserialize)]
pub(super) struct TransactionListNode {
    #[serde(default, rename = "transaction")]
    pub transactions: Vec<TransactionNode>,
}

// Amounts stay as text on the wire; the service is known to emit non-numeric
// placeholders for some of them.
#[derive(Deserialize)]
pub(super) struct TransactionNode {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub symbol: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub amount: Option<String>,
    pub executed_date: Option<String>,
    pub settled_date: Option<String>,
}

/* ---------------- Positions ---------------- */

#[derive(Deserialize)]
pub(super) struct PositionsNode {
    #[serde(default, rename = "position")]
    pub positions: Vec<PositionNode>,
}

#[derive(Deserialize)]
pub(super) struct PositionNode {
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub account_type: Option<String>,
    pub close_price: Option<String>,
    pub current_value: Option<String>,
    pub cost_basis: Option<String>,
}

/* ---------------- Balances ---------------- */

#[derive(Deserialize)]
pub(super) struct BalanceNode {
    pub cash_balance: Option<CurrentNode>,
    pub money_market_balance: Option<CurrentNode>,
    pub margin_balance: Option<CurrentNode>,
}

#[derive(Deserialize)]
pub(super) struct CurrentNode {
    pub current: Option<String>,
}
