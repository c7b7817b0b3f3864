use thiserror::Error;

/// Errors returned by the card utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CardError {
    /// Card numbers must have at least 10 characters to be masked.
    #[error("card number must have at least 10 characters, found {0}")]
    CardTooShort(usize),

    /// Account numbers must have at least 4 characters to be masked.
    #[error("account number must have at least 4 characters, found {0}")]
    AccountTooShort(usize),

    /// The number matches none of the known card networks.
    #[error("unknown card network")]
    UnknownNetwork,
}
