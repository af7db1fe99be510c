//! tdameritrade-rs: ergonomic TD Ameritrade brokerage API client.
//!
//! Quotes, price history, instrument fundamentals and watchlist management go
//! through the JSON API with bearer-token auth. Account balances, positions
//! and transaction history go through the legacy XML services with a
//! `JSESSIONID` session cookie. Every call is a single HTTP round trip, and
//! every failure surfaces as a [`TdError`].

/// Legacy account services: transaction history, positions, balances.
pub mod accounts;
/// Core components: the client, its builder, and the error type.
pub mod core;
/// Instrument fundamentals via the instruments endpoint.
pub mod fundamentals;
/// Price history (OHLCV candles).
pub mod history;
/// Batch quote snapshots.
pub mod quote;
/// Watchlist CRUD.
pub mod watchlist;

pub use crate::core::{TdClient, TdClientBuilder, TdError};

pub use accounts::{
    Balances, BalancesBuilder, Position, PositionsBuilder, Transaction, TransactionHistoryBuilder,
};
pub use fundamentals::{Fundamental, FundamentalsBuilder, InstrumentFundamentals};
pub use history::{Candle, FrequencyType, PeriodType, PriceHistory, PriceHistoryBuilder};
pub use quote::{Quote, QuotesBuilder};
pub use watchlist::{Watchlist, WatchlistItem};
