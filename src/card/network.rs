use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::CardError;

/// Card brands recognised by [`detect_card_network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    Amex,
    Visa,
    Mastercard,
    Discover,
    Jcb,
    Diners,
}

impl CardNetwork {
    /// Lowercase network name, e.g. `"amex"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Amex => "amex",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Discover => "discover",
            Self::Jcb => "jcb",
            Self::Diners => "diners",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Checked in order; the first match wins.
const NETWORK_PATTERNS: &[(CardNetwork, &str)] = &[
    (CardNetwork::Amex, r"^3[47][0-9]{13}$"),
    (CardNetwork::Visa, r"^4[0-9]{12}(?:[0-9]{3}){0,2}$"),
    (
        CardNetwork::Mastercard,
        r"^(?:(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}|(?:6759|676[1-3])[0-9]{8,15})$",
    ),
    (
        CardNetwork::Discover,
        r"^(?:6011[0-9]{12}|65[0-9]{14}|64[4-9][0-9]{13}|622(?:12[6-9]|1[3-9][0-9]|[2-8][0-9]{2}|9[01][0-9]|92[0-5])[0-9]{10})(?:[0-9]{3})?$",
    ),
    (CardNetwork::Jcb, r"^(?:2131|1800|35[0-9]{3})[0-9]{11}(?:[0-9]{3})?$"),
    (CardNetwork::Diners, r"^3(?:0[0-5]|[68][0-9])[0-9]{11}(?:[0-9]{5})?$"),
];

static NETWORKS: Lazy<Vec<(CardNetwork, Regex)>> = Lazy::new(|| {
    NETWORK_PATTERNS
        .iter()
        .filter_map(|&(network, pattern)| match Regex::new(pattern) {
            Ok(re) => Some((network, re)),
            Err(err) => {
                log::error!("card pattern for {network} does not compile: {err}");
                None
            }
        })
        .collect()
});

/// Identify the card network from the number's prefix and length.
///
/// The number must consist of digits only; no Luhn check is performed.
///
/// ```
/// use dough::card::{CardNetwork, detect_card_network};
///
/// assert_eq!(detect_card_network("378734493671000"), Ok(CardNetwork::Amex));
/// assert!(detect_card_network("1111111111111111").is_err());
/// ```
pub fn detect_card_network(number: &str) -> Result<CardNetwork, CardError> {
    NETWORKS
        .iter()
        .find(|(_, re)| re.is_match(number))
        .map(|&(network, _)| network)
        .ok_or(CardError::UnknownNetwork)
}
