mod api;
mod model;
mod wire;

pub use model::{Fundamental, InstrumentFundamentals};

use crate::core::{TdClient, TdError};

/// Fetch the fundamentals block for a single instrument.
///
/// # Errors
///
/// Returns `TdError` if the request fails or the symbol is absent from the
/// response.
pub async fn instrument_fundamentals(
    client: &TdClient,
    symbol: &str,
) -> Result<InstrumentFundamentals, TdError> {
    FundamentalsBuilder::new(client, symbol).fetch().await
}

/// Builder for an instrument-fundamentals request.
pub struct FundamentalsBuilder {
    client: TdClient,
    symbol: String,
}

impl FundamentalsBuilder {
    pub fn new(client: &TdClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// Execute the request.
    ///
    /// # Errors
    ///
    /// Returns `TdError` if the request fails or the symbol is absent from
    /// the response.
    pub async fn fetch(self) -> Result<InstrumentFundamentals, TdError> {
        api::fetch_fundamentals(&self.client, &self.symbol).await
    }
}
