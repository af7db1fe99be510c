mod model;
mod params;
mod wire;

pub use model::{Candle, PriceHistory};
pub use params::{FrequencyType, PeriodType};

use chrono::{DateTime, Utc};

use crate::core::{TdClient, TdError};

/// Builder for a price-history request.
///
/// All parameters are optional; the upstream service applies its own default
/// window when none are given. `period`/`period_type` and `start`/`end` are
/// the two ways of bounding the window and are forwarded as supplied.
pub struct PriceHistoryBuilder {
    client: TdClient,
    symbol: String,
    period_type: Option<PeriodType>,
    period: Option<u32>,
    frequency_type: Option<FrequencyType>,
    frequency: Option<u32>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    need_extended_hours_data: Option<bool>,
}

impl PriceHistoryBuilder {
    pub fn new(client: &TdClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            period_type: None,
            period: None,
            frequency_type: None,
            frequency: None,
            start: None,
            end: None,
            need_extended_hours_data: None,
        }
    }

    /// Set the unit the `period` counts in.
    #[must_use]
    pub const fn period_type(mut self, p: PeriodType) -> Self {
        self.period_type = Some(p);
        self
    }

    /// Set the number of periods of history to fetch.
    #[must_use]
    pub const fn period(mut self, n: u32) -> Self {
        self.period = Some(n);
        self
    }

    /// Set the unit the `frequency` counts in.
    #[must_use]
    pub const fn frequency_type(mut self, f: FrequencyType) -> Self {
        self.frequency_type = Some(f);
        self
    }

    /// Set the bar size in `frequency_type` units.
    #[must_use]
    pub const fn frequency(mut self, n: u32) -> Self {
        self.frequency = Some(n);
        self
    }

    /// Bound the window with an explicit start instant.
    #[must_use]
    pub const fn start(mut self, at: DateTime<Utc>) -> Self {
        self.start = Some(at);
        self
    }

    /// Bound the window with an explicit end instant.
    #[must_use]
    pub const fn end(mut self, at: DateTime<Utc>) -> Self {
        self.end = Some(at);
        self
    }

    /// Include extended-hours bars.
    #[must_use]
    pub const fn need_extended_hours_data(mut self, b: bool) -> Self {
        self.need_extended_hours_data = Some(b);
        self
    }

    /// Execute the request and decode the candles.
    ///
    /// # Errors
    ///
    /// Returns [`TdError::InvalidDates`] when both bounds are set and start
    /// is after end, and the usual transport/status/decode errors otherwise.
    pub async fn fetch(self) -> Result<PriceHistory, TdError> {
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            return Err(TdError::InvalidDates);
        }

        let token = self.client.ensure_access_token().await?;

        let mut url = self
            .client
            .base_api()
            .join(&format!("marketdata/{}/pricehistory", self.symbol))?;
        {
            let mut qp = url.query_pairs_mut();
            if let Some(p) = self.period_type {
                qp.append_pair("periodType", p.as_str());
            }
            if let Some(n) = self.period {
                qp.append_pair("period", &n.to_string());
            }
            if let Some(f) = self.frequency_type {
                qp.append_pair("frequencyType", f.as_str());
            }
            if let Some(n) = self.frequency {
                qp.append_pair("frequency", &n.to_string());
            }
            if let Some(at) = self.start {
                qp.append_pair("startDate", &at.timestamp_millis().to_string());
            }
            if let Some(at) = self.end {
                qp.append_pair("endDate", &at.timestamp_millis().to_string());
            }
            if let Some(b) = self.need_extended_hours_data {
                qp.append_pair("needExtendedHoursData", if b { "true" } else { "false" });
            }
        }

        let resp = self
            .client
            .http()
            .get(url)
            .bearer_auth(&token)
            .header("accept", "application/json")
            .send()
            .await?;

        let body = crate::core::net::read_body(resp).await?;
        let env: wire::HistoryEnvelope = serde_json::from_str(&body).map_err(TdError::Json)?;

        let candles = env
            .candles
            .unwrap_or_default()
            .into_iter()
            .filter_map(|n| {
                // A bar missing any of its prices is dropped rather than
                // zero-filled.
                Some(Candle {
                    datetime: n.datetime?,
                    open: n.open?,
                    high: n.high?,
                    low: n.low?,
                    close: n.close?,
                    volume: n.volume,
                })
            })
            .collect();

        Ok(PriceHistory {
            symbol: env.symbol.unwrap_or(self.symbol),
            candles,
            empty: env.empty.unwrap_or(false),
        })
    }
}
