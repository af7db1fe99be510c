//! Shared decode helpers for wire payloads.

/// Integer coercion applied to legacy balance amounts.
///
/// The legacy services report amounts as decimal strings ("2535.60"); balances
/// are exposed as whole units truncated toward zero, and unparseable text
/// coerces to 0.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn coerce_int(s: &str) -> i64 {
    s.trim().parse::<f64>().map_or(0, |v| v.trunc() as i64)
}

/// Parse an optional wire string into a float, treating unparseable or
/// missing text as absent.
pub(crate) fn parse_f64(s: Option<String>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
}
