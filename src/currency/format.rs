//! Minor units → locale-formatted text.

use serde::{Deserialize, Serialize};

use super::MinorUnits;
use super::error::CurrencyError;
use super::lookup::resolve_by_alpha;
use super::registry::CurrencyMeta;

/// Display variants derived from the canonical formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatStyle {
    /// Symbol, grouping and decimal separator: `$1,000.00`.
    Full,
    /// Alpha code instead of the symbol: `USD 1,000.00`.
    Alpha,
    /// Without symbol: `1,000.00`.
    NoSymbol,
    /// Without symbol and grouping: `1000.00`.
    Decimal,
    /// The minor-unit integer: `100000`.
    Raw,
}

/// Format `amount` minor units of the currency `alpha`.
///
/// ```
/// use dough::currency::format_minor_units;
///
/// assert_eq!(format_minor_units(100000000, "USD").unwrap(), "$1,000,000.00");
/// assert_eq!(format_minor_units(-123456, "EUR").unwrap(), "-1.234,56€");
/// ```
pub fn format_minor_units(amount: MinorUnits, alpha: &str) -> Result<String, CurrencyError> {
    let meta = resolve_by_alpha(alpha)?;
    Ok(format_with(amount, meta))
}

/// Format `amount` in one of the [`FormatStyle`] variants.
pub fn format_minor_units_as(
    amount: MinorUnits,
    alpha: &str,
    style: FormatStyle,
) -> Result<String, CurrencyError> {
    let meta = resolve_by_alpha(alpha)?;
    Ok(format_styled(amount, meta, style))
}

/// Format `amount` using an explicit currency definition.
pub fn format_with(amount: MinorUnits, meta: &CurrencyMeta) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let fraction_digits = meta.fraction_digits as usize;

    // Pad so that at least one whole digit precedes the fraction.
    let digits = format!(
        "{:0>width$}",
        amount.unsigned_abs(),
        width = fraction_digits + 1
    );
    let (whole, fraction) = digits.split_at(digits.len() - fraction_digits);
    let whole = group_digits(whole, meta.grouping_size, meta.grouping_separator);

    let mut number = String::with_capacity(whole.len() + fraction.len() + 2);
    number.push_str(sign);
    number.push_str(&whole);
    if !fraction.is_empty() {
        number.push(meta.decimal_separator);
        number.push_str(fraction);
    }

    if meta.symbol_leading {
        // The sign sits between symbol and digits: "$-17.99".
        format!("{}{}", meta.symbol, number)
    } else {
        format!("{}{}", number, meta.symbol)
    }
}

/// Format `amount` in `style` using an explicit currency definition.
pub fn format_styled(amount: MinorUnits, meta: &CurrencyMeta, style: FormatStyle) -> String {
    match style {
        FormatStyle::Full => format_with(amount, meta),
        FormatStyle::Alpha => swap_symbol_with_alpha(&format_with(amount, meta), meta),
        FormatStyle::NoSymbol => remove_symbol(&format_with(amount, meta), meta),
        FormatStyle::Decimal => {
            remove_grouping(&remove_symbol(&format_with(amount, meta), meta), meta)
        }
        FormatStyle::Raw => amount.to_string(),
    }
}

/// Insert `separator` every `size` digits, counting from the right.
pub fn group_digits(digits: &str, size: usize, separator: char) -> String {
    if size == 0 {
        return digits.to_string();
    }
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / size);
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % size == 0 {
            out.push(separator);
        }
    }
    out
}

/// Replace the symbol with the alpha code: `$1.00` → `USD 1.00`,
/// `1,00€` → `1,00 EUR`.
pub fn swap_symbol_with_alpha(formatted: &str, meta: &CurrencyMeta) -> String {
    match (meta.symbol.is_empty(), meta.symbol_leading) {
        (true, true) => format!("{} {formatted}", meta.alpha),
        (true, false) => format!("{formatted} {}", meta.alpha),
        (false, true) => formatted.replace(&*meta.symbol, &format!("{} ", meta.alpha)),
        (false, false) => formatted.replace(&*meta.symbol, &format!(" {}", meta.alpha)),
    }
}

/// Strip the currency symbol.
pub fn remove_symbol(formatted: &str, meta: &CurrencyMeta) -> String {
    formatted.replace(&*meta.symbol, "")
}

/// Strip the grouping separator.
pub fn remove_grouping(formatted: &str, meta: &CurrencyMeta) -> String {
    formatted.replace(meta.grouping_separator, "")
}

/// Strip the decimal separator.
pub fn remove_decimal(formatted: &str, meta: &CurrencyMeta) -> String {
    formatted.replace(meta.decimal_separator, "")
}
