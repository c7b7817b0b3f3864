use thiserror::Error;

/// Errors returned by currency lookup, parsing and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CurrencyError {
    /// The alpha or numeric code is not in the ISO 4217 registry.
    #[error("invalid ISO 4217 code '{0}'")]
    InvalidIso(String),

    /// The text does not contain a parsable amount.
    #[error("unable to parse amount: {0}")]
    InvalidFormat(String),

    /// The fractional part has a different number of digits than the
    /// currency's minor unit.
    #[error("expected {expected} fraction digits, found {found}")]
    FractionMismatch {
        /// Fraction digits configured for the currency.
        expected: u32,
        /// Fraction digits present in the input.
        found: usize,
    },

    /// The amount does not fit into a signed 64-bit minor-unit count.
    #[error("amount out of range: {0}")]
    OutOfRange(String),

    /// A custom currency definition is inconsistent.
    #[error("invalid currency definition: {0}")]
    InvalidMeta(String),
}
