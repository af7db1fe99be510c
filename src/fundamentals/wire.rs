use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct InstrumentNode {
    pub symbol: Option<String>,
    pub cusip: Option<String>,
    pub description: Option<String>,
    pub exchange: Option<String>,
    #[serde(rename = "assetType")]
    pub asset_type: Option<String>,
    pub fundamental: Option<FundamentalNode>,
}

#[derive(Deserialize)]
pub(super) struct FundamentalNode {
    pub high52: Option<f64>,
    pub low52: Option<f64>,
    #[serde(rename = "dividendAmount")]
    pub dividend_amount: Option<f64>,
    #[serde(rename = "dividendYield")]
    pub dividend_yield: Option<f64>,
    #[serde(rename = "peRatio")]
    pub pe_ratio: Option<f64>,
    #[serde(rename = "pegRatio")]
    pub peg_ratio: Option<f64>,
    #[serde(rename = "pbRatio")]
    pub pb_ratio: Option<f64>,
    #[serde(rename = "grossMarginTTM")]
    pub gross_margin_ttm: Option<f64>,
    #[serde(rename = "netProfitMarginTTM")]
    pub net_profit_margin_ttm: Option<f64>,
    #[serde(rename = "operatingMarginTTM")]
    pub operating_margin_ttm: Option<f64>,
    #[serde(rename = "returnOnEquity")]
    pub return_on_equity: Option<f64>,
    #[serde(rename = "returnOnAssets")]
    pub return_on_assets: Option<f64>,
    #[serde(rename = "epsTTM")]
    pub eps_ttm: Option<f64>,
    #[serde(rename = "epsChangePercentTTM")]
    pub eps_change_percent_ttm: Option<f64>,
    #[serde(rename = "sharesOutstanding")]
    pub shares_outstanding: Option<f64>,
    #[serde(rename = "marketCap")]
    pub market_cap: Option<f64>,
}
