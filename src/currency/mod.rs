//! ISO 4217 currency registry, parsing and formatting.
//!
//! Amounts are exact counts of minor units ([`MinorUnits`]); floating point
//! never holds a currency amount. Text is read and rendered with the
//! separators, symbol placement and precision of the currency's home locale.

mod builder;
mod error;
mod format;
mod lookup;
mod parse;
mod registry;

pub use builder::CurrencyMetaBuilder;
pub use error::CurrencyError;
pub use format::{
    FormatStyle, format_minor_units, format_minor_units_as, format_styled, format_with,
    group_digits, remove_decimal, remove_grouping, remove_symbol, swap_symbol_with_alpha,
};
pub use lookup::{
    alpha_from_numeric, is_known_currency_code, numeric_from_alpha, resolve_all,
    resolve_by_alpha, resolve_by_numeric,
};
pub use parse::{parse_to_minor_units, parse_with};
pub use registry::{CurrencyMeta, currencies};

/// Signed count of a currency's smallest unit (e.g. cents).
pub type MinorUnits = i64;
