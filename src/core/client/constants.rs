//! Centralized constants for default endpoints and timeouts.

use std::time::Duration;

/// Modern (JSON) API root; operation paths are joined onto it.
pub(crate) const DEFAULT_BASE_API: &str = "https://api.tdameritrade.com/v1/";

/// OAuth2 token endpoint used to refresh the access token.
pub(crate) const DEFAULT_TOKEN_URL: &str = "https://api.tdameritrade.com/v1/oauth2/token";

/// Legacy transaction-history service (XML envelope).
pub(crate) const DEFAULT_HISTORY_URL: &str = "https://apis.tdameritrade.com/apps/100/History";

/// Legacy balances-and-positions service (XML envelope).
pub(crate) const DEFAULT_BALANCES_AND_POSITIONS_URL: &str =
    "https://apis.tdameritrade.com/apps/100/BalancesAndPositions";

/// Fixed per-request timeout on the legacy services.
pub(crate) const LEGACY_TIMEOUT: Duration = Duration::from_secs(10);
