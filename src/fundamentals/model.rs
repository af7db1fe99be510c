use serde::Serialize;

/// The instrument entry returned by the fundamentals projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentFundamentals {
    pub symbol: String,
    pub cusip: Option<String>,
    pub description: Option<String>,
    pub exchange: Option<String>,
    pub asset_type: Option<String>,
    pub fundamental: Fundamental,
}

/// Fundamental figures for an instrument. Fields the upstream omits are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fundamental {
    pub high52: Option<f64>,
    pub low52: Option<f64>,
    pub dividend_amount: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub pb_ratio: Option<f64>,
    pub gross_margin_ttm: Option<f64>,
    pub net_profit_margin_ttm: Option<f64>,
    pub operating_margin_ttm: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub eps_ttm: Option<f64>,
    pub eps_change_percent_ttm: Option<f64>,
    pub shares_outstanding: Option<f64>,
    pub market_cap: Option<f64>,
}
