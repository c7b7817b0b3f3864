use std::borrow::Cow;

use super::error::CurrencyError;
use super::registry::CurrencyMeta;

/// Builder for currencies that are not in the registry.
///
/// Defaults follow the most common Latin-script convention: two fraction
/// digits, `.` as decimal separator, `,` every three digits, leading symbol.
///
/// ```
/// use dough::currency::{CurrencyMetaBuilder, format_with, parse_with};
///
/// let points = CurrencyMetaBuilder::new("Loyalty Point", "XLP", "999", "Ⓟ")
///     .fraction_digits(0)
///     .decimal_separator(',')
///     .grouping(3, '.')
///     .build()
///     .unwrap();
///
/// assert_eq!(format_with(1234567, &points), "Ⓟ1.234.567");
/// assert_eq!(parse_with("Ⓟ1.234.567", &points, false), Ok(1234567));
/// ```
pub struct CurrencyMetaBuilder {
    unit: String,
    alpha: String,
    numeric: String,
    symbol: String,
    fraction_digits: u32,
    decimal_separator: char,
    grouping_size: usize,
    grouping_separator: char,
    symbol_leading: bool,
}

impl CurrencyMetaBuilder {
    pub fn new(
        unit: impl Into<String>,
        alpha: impl Into<String>,
        numeric: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            unit: unit.into(),
            alpha: alpha.into(),
            numeric: numeric.into(),
            symbol: symbol.into(),
            fraction_digits: 2,
            decimal_separator: '.',
            grouping_size: 3,
            grouping_separator: ',',
            symbol_leading: true,
        }
    }

    /// Start from an existing definition, e.g. a registry entry.
    pub fn from_meta(meta: &CurrencyMeta) -> Self {
        Self {
            unit: meta.unit.to_string(),
            alpha: meta.alpha.to_string(),
            numeric: meta.numeric.to_string(),
            symbol: meta.symbol.to_string(),
            fraction_digits: meta.fraction_digits,
            decimal_separator: meta.decimal_separator,
            grouping_size: meta.grouping_size,
            grouping_separator: meta.grouping_separator,
            symbol_leading: meta.symbol_leading,
        }
    }

    pub fn fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Group `size` digits with `separator`; a size of 0 disables grouping.
    pub fn grouping(mut self, size: usize, separator: char) -> Self {
        self.grouping_size = size;
        self.grouping_separator = separator;
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn symbol_trailing(mut self) -> Self {
        self.symbol_leading = false;
        self
    }

    pub fn symbol_leading(mut self) -> Self {
        self.symbol_leading = true;
        self
    }

    /// Validate and build the definition.
    ///
    /// Rejects definitions that could not be parsed back from their own
    /// formatted output.
    pub fn build(self) -> Result<CurrencyMeta, CurrencyError> {
        let alpha = self.alpha.to_ascii_uppercase();
        if alpha.len() != 3 || !alpha.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidMeta(format!(
                "alpha code '{}' must be three ASCII letters",
                self.alpha
            )));
        }
        if self.numeric.len() != 3 || !self.numeric.chars().all(|c| c.is_ascii_digit()) {
            return Err(CurrencyError::InvalidMeta(format!(
                "numeric code '{}' must be three digits",
                self.numeric
            )));
        }
        if self.fraction_digits > 18 {
            return Err(CurrencyError::InvalidMeta(format!(
                "{} fraction digits exceed the supported maximum of 18",
                self.fraction_digits
            )));
        }
        if self.decimal_separator == self.grouping_separator {
            return Err(CurrencyError::InvalidMeta(
                "decimal and grouping separator must differ".into(),
            ));
        }
        for separator in [self.decimal_separator, self.grouping_separator] {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(CurrencyError::InvalidMeta(format!(
                    "separator '{separator}' is not allowed"
                )));
            }
        }
        if self.symbol.is_empty() {
            return Err(CurrencyError::InvalidMeta("symbol must not be empty".into()));
        }
        if self.symbol.chars().any(|c| c.is_ascii_digit() || c == '-') {
            return Err(CurrencyError::InvalidMeta(format!(
                "symbol '{}' must not contain digits or '-'",
                self.symbol
            )));
        }
        // Parsing strips the symbol first; one made of separators would
        // strip separators out of the amount as well.
        if self
            .symbol
            .chars()
            .all(|c| c == self.decimal_separator || c == self.grouping_separator)
        {
            return Err(CurrencyError::InvalidMeta(format!(
                "symbol '{}' consists only of separators",
                self.symbol
            )));
        }

        Ok(CurrencyMeta {
            unit: Cow::Owned(self.unit),
            alpha: Cow::Owned(alpha),
            numeric: Cow::Owned(self.numeric),
            symbol: Cow::Owned(self.symbol),
            fraction_digits: self.fraction_digits,
            decimal_separator: self.decimal_separator,
            grouping_size: self.grouping_size,
            grouping_separator: self.grouping_separator,
            symbol_leading: self.symbol_leading,
        })
    }
}
