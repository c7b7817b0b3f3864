//! Postal code validation per country.
//!
//! ```
//! use dough::postal::is_valid_postal_code;
//!
//! assert!(is_valid_postal_code("US", "12345-6789"));
//! assert!(is_valid_postal_code("gb", "ZE1 0AA"));
//! assert!(!is_valid_postal_code("DE", "1011"));
//! ```

mod patterns;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use patterns::POSTAL_PATTERNS;

static COMPILED: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    POSTAL_PATTERNS
        .iter()
        .filter_map(|(country, pattern)| {
            let pattern = (*pattern)?;
            match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(re) => Some((*country, re)),
                Err(err) => {
                    log::error!("postal code pattern for {country} does not compile: {err}");
                    None
                }
            }
        })
        .collect()
});

/// Check `code` against the postal code format of `country_code`
/// (ISO 3166-1 alpha-2, case-insensitive).
///
/// Unknown countries and countries without postal codes yield `false`.
pub fn is_valid_postal_code(country_code: &str, code: &str) -> bool {
    let country = country_code.to_ascii_uppercase();
    match COMPILED.get(country.as_str()) {
        Some(re) => re.is_match(code),
        None => {
            log::trace!("no postal code format for country {country_code:?}");
            false
        }
    }
}

/// Whether `country_code` is known to use postal codes.
pub fn has_postal_codes(country_code: &str) -> bool {
    let country = country_code.to_ascii_uppercase();
    POSTAL_PATTERNS
        .binary_search_by(|(c, _)| c.cmp(&country.as_str()))
        .is_ok_and(|idx| POSTAL_PATTERNS[idx].1.is_some())
}
