//! Payment card helpers: masking, Luhn checksum and network detection.
//!
//! These operate on plain strings and never store or log card numbers.

mod error;
mod luhn;
mod mask;
mod network;

pub use error::CardError;
pub use luhn::is_valid_luhn;
pub use mask::{MaskedCard, mask_ach_account, mask_card};
pub use network::{CardNetwork, detect_card_network};
