//! # dough
//!
//! Money handling for ISO 4217 currencies: exact minor-unit amounts,
//! locale-aware parsing and formatting, and percentage arithmetic with an
//! explicit rounding policy.
//!
//! Amounts are `i64` counts of a currency's smallest unit and intermediate
//! arithmetic uses [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use dough::currency::{format_minor_units, parse_to_minor_units};
//! use dough::rounding::{RoundingPolicy, percentage_of_minor};
//! use rust_decimal_macros::dec;
//!
//! let cents = parse_to_minor_units("$1,234.56", "USD", false).unwrap();
//! assert_eq!(cents, 123456);
//! assert_eq!(format_minor_units(cents, "USD").unwrap(), "$1,234.56");
//! assert_eq!(format_minor_units(-123456, "EUR").unwrap(), "-1.234,56€");
//!
//! let vat = percentage_of_minor(cents, 19.0, 0, RoundingPolicy::RoundHalfUp).unwrap();
//! assert_eq!(vat, dec!(23457));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `currency` (default) | ISO 4217 registry, parsing, formatting |
//! | `postal` | Postal code validation per country |
//! | `card` | Card masking, Luhn check, network detection |
//! | `date` | Card expiry dates, timezone details |
//! | `all` | Everything |
//!
//! Percentage arithmetic in [`rounding`] is always available.

#[cfg(feature = "currency")]
pub mod currency;

pub mod rounding;

#[cfg(feature = "postal")]
pub mod postal;

#[cfg(feature = "card")]
pub mod card;

#[cfg(feature = "date")]
pub mod date;

#[cfg(feature = "currency")]
pub use crate::currency::{
    CurrencyError, CurrencyMeta, MinorUnits, format_minor_units, parse_to_minor_units,
};
pub use crate::rounding::{ArithmeticError, RoundingPolicy};
