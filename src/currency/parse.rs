//! Locale-formatted text → exact minor units.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::MinorUnits;
use super::error::CurrencyError;
use super::lookup::resolve_by_alpha;
use super::registry::CurrencyMeta;

/// Parse `text` into minor units of the currency `alpha`.
///
/// Symbols, grouping separators and whitespace are ignored. A `-` anywhere
/// before the first digit makes the amount negative, so `"-$17.99"` and
/// `"$-17.99"` both yield `-1799`.
///
/// Unless `loose_fraction` is set, a fractional part must have exactly as
/// many digits as the currency's minor unit: `"$5.0"` is rejected rather
/// than read as five dollars.
///
/// ```
/// use dough::currency::parse_to_minor_units;
///
/// assert_eq!(parse_to_minor_units("$1,234.56", "USD", false), Ok(123456));
/// assert_eq!(parse_to_minor_units("1.234,56€", "EUR", false), Ok(123456));
/// assert_eq!(parse_to_minor_units("¥1000", "JPY", false), Ok(1000));
/// ```
pub fn parse_to_minor_units(
    text: &str,
    alpha: &str,
    loose_fraction: bool,
) -> Result<MinorUnits, CurrencyError> {
    let meta = resolve_by_alpha(alpha)?;
    parse_with(text, meta, loose_fraction)
}

/// Parse `text` using an explicit currency definition.
pub fn parse_with(
    text: &str,
    meta: &CurrencyMeta,
    loose_fraction: bool,
) -> Result<MinorUnits, CurrencyError> {
    let cleaned = clean(text, meta);
    if !cleaned.digits.bytes().any(|b| b.is_ascii_digit()) {
        log::debug!("no digits in {text:?} for {}", meta.alpha);
        return Err(CurrencyError::InvalidFormat(text.to_string()));
    }

    let mut parts = cleaned.digits.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if parts.next().is_some() {
        log::debug!("multiple decimal separators in {text:?} for {}", meta.alpha);
        return Err(CurrencyError::InvalidFormat(text.to_string()));
    }

    if let Some(fraction) = fraction {
        if !loose_fraction && fraction.len() != meta.fraction_digits as usize {
            log::debug!(
                "rejected {text:?} for {}: {} fraction digits, expected {}",
                meta.alpha,
                fraction.len(),
                meta.fraction_digits
            );
            return Err(CurrencyError::FractionMismatch {
                expected: meta.fraction_digits,
                found: fraction.len(),
            });
        }
    }

    match fraction {
        None | Some("") if meta.fraction_digits == 0 => {
            integer_units(whole, cleaned.negative, text)
        }
        _ => scaled_units(whole, fraction.unwrap_or_default(), cleaned.negative, meta, text),
    }
}

struct Cleaned {
    /// Digits with the decimal separator translated to `.`.
    digits: String,
    negative: bool,
}

fn clean(text: &str, meta: &CurrencyMeta) -> Cleaned {
    // Symbols such as "kr." or "د.إ" contain the decimal separator.
    let text = if meta.symbol.is_empty() {
        text.to_string()
    } else {
        text.replace(&*meta.symbol, "")
    };

    let mut digits = String::with_capacity(text.len());
    let mut negative = false;
    let mut seen_digit = false;
    for c in text.chars() {
        if c.is_ascii_digit() {
            seen_digit = true;
            digits.push(c);
        } else if c == meta.decimal_separator {
            digits.push('.');
        } else if c == '-' && !seen_digit {
            negative = true;
        }
    }
    Cleaned { digits, negative }
}

fn integer_units(whole: &str, negative: bool, text: &str) -> Result<MinorUnits, CurrencyError> {
    let magnitude: i128 = whole
        .parse()
        .map_err(|_| CurrencyError::OutOfRange(text.to_string()))?;
    let signed = if negative { -magnitude } else { magnitude };
    MinorUnits::try_from(signed).map_err(|_| CurrencyError::OutOfRange(text.to_string()))
}

fn scaled_units(
    whole: &str,
    fraction: &str,
    negative: bool,
    meta: &CurrencyMeta,
    text: &str,
) -> Result<MinorUnits, CurrencyError> {
    let whole = if whole.is_empty() { "0" } else { whole };
    let sign = if negative { "-" } else { "" };
    let literal = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    };

    let out_of_range = || CurrencyError::OutOfRange(text.to_string());
    let value = Decimal::from_str(&literal).map_err(|_| out_of_range())?;
    let factor = meta
        .minor_per_major()
        .map(Decimal::from)
        .ok_or_else(out_of_range)?;
    value
        .checked_mul(factor)
        .ok_or_else(out_of_range)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_with_grouping() {
        let cases = [
            ("$0.00", 0),
            ("$0.01", 1),
            ("$0.10", 10),
            ("$1.00", 100),
            ("$10.00", 1000),
            ("$100.00", 10000),
            ("$1,000.00", 100000),
            ("$10,000.00", 1000000),
            ("$100,000.00", 10000000),
            ("$1,000,000.00", 100000000),
        ];
        for (text, expected) in cases {
            assert_eq!(parse_to_minor_units(text, "USD", false), Ok(expected), "{text}");
        }
    }

    #[test]
    fn empty_and_symbol_only_input() {
        for text in ["", "abcd", "$", "   ", "$ ,", "."] {
            assert_eq!(
                parse_to_minor_units(text, "USD", false),
                Err(CurrencyError::InvalidFormat(text.to_string())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn sign_before_or_after_symbol() {
        assert_eq!(parse_to_minor_units("-$17.99", "USD", false), Ok(-1799));
        assert_eq!(parse_to_minor_units("$-17.99", "USD", false), Ok(-1799));
        assert_eq!(parse_to_minor_units("- $ 17.99", "USD", false), Ok(-1799));
        // A dash after the digits is not a sign.
        assert_eq!(parse_to_minor_units("$17.99-", "USD", false), Ok(1799));
    }

    #[test]
    fn strict_fraction_digits() {
        assert_eq!(
            parse_to_minor_units("$5.0", "USD", false),
            Err(CurrencyError::FractionMismatch { expected: 2, found: 1 })
        );
        assert_eq!(
            parse_to_minor_units("$5.000", "USD", false),
            Err(CurrencyError::FractionMismatch { expected: 2, found: 3 })
        );
        assert_eq!(parse_to_minor_units("$5.00", "USD", false), Ok(500));
        assert_eq!(parse_to_minor_units("$5", "USD", false), Ok(500));
    }

    #[test]
    fn loose_fraction_digits() {
        assert_eq!(parse_to_minor_units("$5.0", "USD", true), Ok(500));
        assert_eq!(parse_to_minor_units("$5.", "USD", true), Ok(500));
        assert_eq!(parse_to_minor_units("$5.005", "USD", true), Ok(501));
        assert_eq!(parse_to_minor_units("$-5.005", "USD", true), Ok(-501));
        assert_eq!(parse_to_minor_units("$5.004", "USD", true), Ok(500));
    }

    #[test]
    fn zero_fraction_currency() {
        assert_eq!(parse_to_minor_units("¥1000", "JPY", false), Ok(1000));
        assert_eq!(parse_to_minor_units("¥1,000", "JPY", false), Ok(1000));
        assert_eq!(
            parse_to_minor_units("¥1000.5", "JPY", false),
            Err(CurrencyError::FractionMismatch { expected: 0, found: 1 })
        );
        assert_eq!(parse_to_minor_units("¥1000.5", "JPY", true), Ok(1001));
    }

    #[test]
    fn multiple_separators() {
        assert_eq!(
            parse_to_minor_units("1.2.3", "USD", true),
            Err(CurrencyError::InvalidFormat("1.2.3".into()))
        );
    }

    #[test]
    fn comma_decimal_locales() {
        assert_eq!(parse_to_minor_units("1.234,56€", "EUR", false), Ok(123456));
        assert_eq!(parse_to_minor_units("1 234,56 kr", "SEK", false), Ok(123456));
        assert_eq!(parse_to_minor_units("R$ 10,00", "BRL", false), Ok(1000));
    }

    #[test]
    fn symbol_containing_decimal_separator() {
        assert_eq!(parse_to_minor_units("1.234,56kr.", "DKK", false), Ok(123456));
        assert_eq!(parse_to_minor_units("Fr.1'234.56", "CHF", false), Ok(123456));
        assert_eq!(parse_to_minor_units("د.إ12.50", "AED", false), Ok(1250));
    }

    #[test]
    fn three_and_four_digit_minor_units() {
        assert_eq!(parse_to_minor_units(".د.ب1.250", "BHD", false), Ok(1250));
        assert_eq!(parse_to_minor_units("UF1.000,0001", "CLF", false), Ok(10000001));
    }

    #[test]
    fn bare_fraction() {
        assert_eq!(parse_to_minor_units("$.50", "USD", false), Ok(50));
    }

    #[test]
    fn i64_bounds() {
        assert_eq!(
            parse_to_minor_units("-$92,233,720,368,547,758.08", "USD", false),
            Ok(i64::MIN)
        );
        assert_eq!(
            parse_to_minor_units("$92,233,720,368,547,758.07", "USD", false),
            Ok(i64::MAX)
        );
        assert!(matches!(
            parse_to_minor_units("$92,233,720,368,547,758.08", "USD", false),
            Err(CurrencyError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_to_minor_units("¥99999999999999999999999", "JPY", false),
            Err(CurrencyError::OutOfRange(_))
        ));
    }

    #[test]
    fn unknown_currency() {
        assert_eq!(
            parse_to_minor_units("$1.00", "USA", false),
            Err(CurrencyError::InvalidIso("USA".into()))
        );
    }
}
