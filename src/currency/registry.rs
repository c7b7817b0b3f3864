//! ISO 4217 currency registry.
//!
//! One [`CurrencyMeta`] per alpha code, carrying everything the parser and
//! formatter need to render amounts the way the currency's home locale does.
//! Sorted by alpha code for binary search.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Display and precision metadata for one ISO 4217 currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyMeta {
    /// Display name (e.g. "US Dollar").
    pub unit: Cow<'static, str>,
    /// ISO 4217 alpha-3 code, uppercase (e.g. "USD").
    pub alpha: Cow<'static, str>,
    /// ISO 4217 numeric code, zero-padded to three digits (e.g. "840").
    pub numeric: Cow<'static, str>,
    /// Display symbol; may span several code points (e.g. "HK$", "د.إ").
    pub symbol: Cow<'static, str>,
    /// Number of minor-unit digits; 0 for currencies without subdivision.
    pub fraction_digits: u32,
    /// Decimal marker in the home locale.
    pub decimal_separator: char,
    /// Digits between grouping separators; 0 disables grouping.
    pub grouping_size: usize,
    /// Thousands separator in the home locale.
    pub grouping_separator: char,
    /// Whether the symbol precedes the amount.
    pub symbol_leading: bool,
}

impl CurrencyMeta {
    /// Number of minor units in one major unit (`10^fraction_digits`).
    ///
    /// Returns `None` when the factor does not fit into a `u64`.
    pub fn minor_per_major(&self) -> Option<u64> {
        10u64.checked_pow(self.fraction_digits)
    }
}

impl std::fmt::Display for CurrencyMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.alpha, self.unit)
    }
}

#[allow(clippy::too_many_arguments)]
const fn meta(
    unit: &'static str,
    alpha: &'static str,
    numeric: &'static str,
    symbol: &'static str,
    fraction_digits: u32,
    decimal_separator: char,
    grouping_separator: char,
    symbol_leading: bool,
) -> CurrencyMeta {
    CurrencyMeta {
        unit: Cow::Borrowed(unit),
        alpha: Cow::Borrowed(alpha),
        numeric: Cow::Borrowed(numeric),
        symbol: Cow::Borrowed(symbol),
        fraction_digits,
        decimal_separator,
        grouping_size: 3,
        grouping_separator,
        symbol_leading,
    }
}

/// All registered currencies, sorted by alpha code.
pub fn currencies() -> &'static [CurrencyMeta] {
    CURRENCIES
}

pub(crate) static CURRENCIES: &[CurrencyMeta] = &[
    meta("UAE Dirham", "AED", "784", "د.إ", 2, '.', ',', true),
    meta("Afghani", "AFN", "971", "؋", 2, '.', ',', false),
    meta("Lek", "ALL", "008", "L", 2, ',', '.', false),
    meta("Armenian Dram", "AMD", "051", "֏", 2, '.', ',', false),
    meta("Argentine Peso", "ARS", "032", "$", 2, ',', '.', true),
    meta("Australian Dollar", "AUD", "036", "$", 2, '.', ',', true),
    meta("Azerbaijan Manat", "AZN", "944", "₼", 2, '.', ',', false),
    meta("Convertible Mark", "BAM", "977", "KM", 2, ',', '.', false),
    meta("Taka", "BDT", "050", "৳", 2, '.', ',', true),
    meta("Bulgarian Lev", "BGN", "975", "лв.", 2, ',', ' ', false),
    meta("Bahraini Dinar", "BHD", "048", ".د.ب", 3, '.', ',', true),
    meta("Brazilian Real", "BRL", "986", "R$", 2, ',', '.', true),
    meta("Belarusian Ruble", "BYN", "933", "Br", 2, ',', ' ', false),
    meta("Canadian Dollar", "CAD", "124", "$", 2, '.', ',', true),
    meta("Swiss Franc", "CHF", "756", "Fr.", 2, '.', '\'', true),
    meta("Unidad de Fomento", "CLF", "990", "UF", 4, ',', '.', true),
    meta("Chilean Peso", "CLP", "152", "$", 0, ',', '.', true),
    meta("Yuan Renminbi", "CNY", "156", "¥", 2, '.', ',', true),
    meta("Colombian Peso", "COP", "170", "$", 2, ',', '.', true),
    meta("Czech Koruna", "CZK", "203", "Kč", 2, ',', ' ', false),
    meta("Danish Krone", "DKK", "208", "kr.", 2, ',', '.', false),
    meta("Egyptian Pound", "EGP", "818", "E£", 2, '.', ',', true),
    meta("Euro", "EUR", "978", "€", 2, ',', '.', false),
    meta("Pound Sterling", "GBP", "826", "£", 2, '.', ',', true),
    meta("Lari", "GEL", "981", "₾", 2, ',', ' ', false),
    meta("Hong Kong Dollar", "HKD", "344", "HK$", 2, '.', ',', true),
    meta("Forint", "HUF", "348", "Ft", 2, ',', ' ', false),
    meta("Rupiah", "IDR", "360", "Rp", 2, ',', '.', true),
    meta("New Israeli Sheqel", "ILS", "376", "₪", 2, '.', ',', true),
    meta("Indian Rupee", "INR", "356", "₹", 2, '.', ',', true),
    meta("Iraqi Dinar", "IQD", "368", "ع.د", 3, '.', ',', true),
    meta("Iceland Krona", "ISK", "352", "kr", 0, ',', '.', false),
    meta("Jordanian Dinar", "JOD", "400", "د.ا", 3, '.', ',', true),
    meta("Yen", "JPY", "392", "¥", 0, '.', ',', true),
    meta("Kenyan Shilling", "KES", "404", "KSh", 2, '.', ',', true),
    meta("Won", "KRW", "410", "₩", 0, '.', ',', true),
    meta("Kuwaiti Dinar", "KWD", "414", "د.ك", 3, '.', ',', true),
    meta("Tenge", "KZT", "398", "₸", 2, ',', ' ', false),
    meta("Sri Lanka Rupee", "LKR", "144", "Rs", 2, '.', ',', true),
    meta("Moroccan Dirham", "MAD", "504", "د.م.", 2, '.', ',', true),
    meta("Mexican Peso", "MXN", "484", "$", 2, '.', ',', true),
    meta("Malaysian Ringgit", "MYR", "458", "RM", 2, '.', ',', true),
    meta("Naira", "NGN", "566", "₦", 2, '.', ',', true),
    meta("Norwegian Krone", "NOK", "578", "kr", 2, ',', ' ', false),
    meta("New Zealand Dollar", "NZD", "554", "$", 2, '.', ',', true),
    meta("Rial Omani", "OMR", "512", "ر.ع.", 3, '.', ',', true),
    meta("Sol", "PEN", "604", "S/", 2, '.', ',', true),
    meta("Philippine Peso", "PHP", "608", "₱", 2, '.', ',', true),
    meta("Pakistan Rupee", "PKR", "586", "Rs", 2, '.', ',', true),
    meta("Zloty", "PLN", "985", "zł", 2, ',', ' ', false),
    meta("Qatari Rial", "QAR", "634", "ر.ق", 2, '.', ',', true),
    meta("Romanian Leu", "RON", "946", "lei", 2, ',', '.', false),
    meta("Serbian Dinar", "RSD", "941", "дин.", 2, ',', '.', false),
    meta("Russian Ruble", "RUB", "643", "₽", 2, ',', ' ', false),
    meta("Saudi Riyal", "SAR", "682", "ر.س", 2, '.', ',', true),
    meta("Swedish Krona", "SEK", "752", "kr", 2, ',', ' ', false),
    meta("Singapore Dollar", "SGD", "702", "$", 2, '.', ',', true),
    meta("Baht", "THB", "764", "฿", 2, '.', ',', true),
    meta("Tunisian Dinar", "TND", "788", "د.ت", 3, ',', '.', false),
    meta("Turkish Lira", "TRY", "949", "₺", 2, ',', '.', true),
    meta("New Taiwan Dollar", "TWD", "901", "NT$", 2, '.', ',', true),
    meta("Hryvnia", "UAH", "980", "₴", 2, ',', ' ', false),
    meta("Uganda Shilling", "UGX", "800", "USh", 0, '.', ',', true),
    meta("US Dollar", "USD", "840", "$", 2, '.', ',', true),
    meta("Peso Uruguayo", "UYU", "858", "$U", 2, ',', '.', true),
    meta("Dong", "VND", "704", "₫", 0, ',', '.', false),
    meta("CFA Franc BEAC", "XAF", "950", "FCFA", 0, ',', ' ', false),
    meta("CFA Franc BCEAO", "XOF", "952", "CFA", 0, ',', ' ', false),
    meta("Rand", "ZAR", "710", "R", 2, ',', ' ', true),
];
