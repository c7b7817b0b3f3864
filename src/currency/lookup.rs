//! Resolve ISO 4217 alpha and numeric codes against the registry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::error::CurrencyError;
use super::registry::{CURRENCIES, CurrencyMeta};

static BY_NUMERIC: Lazy<HashMap<&'static str, &'static CurrencyMeta>> = Lazy::new(|| {
    CURRENCIES
        .iter()
        .map(|m| (&*m.numeric, m))
        .collect()
});

/// Look up a currency by its alpha-3 code, ignoring ASCII case.
pub fn resolve_by_alpha(code: &str) -> Result<&'static CurrencyMeta, CurrencyError> {
    if code.len() != 3 {
        return Err(CurrencyError::InvalidIso(code.to_string()));
    }
    let upper = code.to_ascii_uppercase();
    CURRENCIES
        .binary_search_by(|m| (*m.alpha).cmp(upper.as_str()))
        .map(|idx| &CURRENCIES[idx])
        .map_err(|_| CurrencyError::InvalidIso(code.to_string()))
}

/// Look up a currency by its three-digit numeric code (e.g. "840").
pub fn resolve_by_numeric(code: &str) -> Result<&'static CurrencyMeta, CurrencyError> {
    BY_NUMERIC
        .get(code)
        .copied()
        .ok_or_else(|| CurrencyError::InvalidIso(code.to_string()))
}

/// Alpha code for a numeric code ("840" → "USD").
pub fn alpha_from_numeric(code: &str) -> Result<&'static str, CurrencyError> {
    resolve_by_numeric(code).map(|m| &*m.alpha)
}

/// Numeric code for an alpha code ("usd" → "840").
pub fn numeric_from_alpha(code: &str) -> Result<&'static str, CurrencyError> {
    resolve_by_alpha(code).map(|m| &*m.numeric)
}

/// Check whether `code` is a registered alpha code (case-insensitive).
pub fn is_known_currency_code(code: &str) -> bool {
    resolve_by_alpha(code).is_ok()
}

/// Resolve several alpha codes at once.
///
/// Fails on the first unknown code; no partial list is returned.
pub fn resolve_all<I, S>(codes: I) -> Result<Vec<&'static CurrencyMeta>, CurrencyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .map(|code| resolve_by_alpha(code.as_ref()))
        .collect()
}
