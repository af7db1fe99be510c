use serde::Serialize;

/// One OHLCV bar. `datetime` is epoch milliseconds, as reported upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub datetime: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

/// The decoded price-history response for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    pub symbol: String,
    pub candles: Vec<Candle>,
    /// Upstream's own "no data for this window" marker.
    pub empty: bool,
}
