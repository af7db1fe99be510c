use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct HistoryEnvelope {
    pub symbol: Option<String>,
    pub empty: Option<bool>,
    pub candles: Option<Vec<CandleNode>>,
}

#[derive(Deserialize)]
pub(super) struct CandleNode {
    pub datetime: Option<i64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}
