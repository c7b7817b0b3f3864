use serde::{Deserialize, Serialize};

use super::error::CardError;

const MASK: char = '*';

/// A card number with everything but the first six and last four
/// characters replaced by `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedCard {
    /// Issuer identification prefix.
    pub first_six: String,
    pub last_four: String,
    /// Full-length masked number, e.g. `411111******1111`.
    pub masked: String,
}

/// Mask a card number for display or storage.
///
/// ```
/// use dough::card::mask_card;
///
/// let card = mask_card("4111111111111111").unwrap();
/// assert_eq!(card.masked, "411111******1111");
/// ```
pub fn mask_card(number: &str) -> Result<MaskedCard, CardError> {
    let chars: Vec<char> = number.chars().collect();
    let len = chars.len();
    if len < 10 {
        return Err(CardError::CardTooShort(len));
    }

    let first_six: String = chars[..6].iter().collect();
    let last_four: String = chars[len - 4..].iter().collect();
    let mut masked = String::with_capacity(number.len());
    masked.push_str(&first_six);
    masked.extend(std::iter::repeat_n(MASK, len - 10));
    masked.push_str(&last_four);

    Ok(MaskedCard {
        first_six,
        last_four,
        masked,
    })
}

/// Mask a bank account number, keeping the first two and last two
/// characters.
pub fn mask_ach_account(number: &str) -> Result<String, CardError> {
    let chars: Vec<char> = number.chars().collect();
    let len = chars.len();
    if len < 4 {
        return Err(CardError::AccountTooShort(len));
    }

    let mut masked = String::with_capacity(number.len());
    masked.extend(&chars[..2]);
    masked.extend(std::iter::repeat_n(MASK, len - 4));
    masked.extend(&chars[len - 2..]);
    Ok(masked)
}
