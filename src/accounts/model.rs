use serde::Serialize;

/// One transaction from the legacy history service. Dates stay in the
/// service's own `YYYYMMDD` text form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub transaction_type: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    pub amount: Option<f64>,
    pub executed_date: Option<String>,
    pub settled_date: Option<String>,
}

/// One open position from the legacy balances-and-positions service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub symbol: String,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub account_type: Option<String>,
    pub close_price: Option<f64>,
    pub current_value: Option<f64>,
    pub cost_basis: Option<f64>,
}

/// Account balances, integer-coerced to whole units the way the legacy
/// service has always been consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balances {
    pub cash_balance: i64,
    pub money_market_balance: i64,
    /// 0 when the envelope carries no margin balance.
    pub margin_balance: i64,
}
