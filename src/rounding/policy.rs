use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How a value is brought to the requested number of fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingPolicy {
    /// Ties round away from zero (commercial rounding).
    RoundHalfUp,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// Ties round to the nearest even digit.
    BankersRound,
}

impl RoundingPolicy {
    /// The equivalent `rust_decimal` strategy.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            Self::RoundHalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::Ceil => RoundingStrategy::ToPositiveInfinity,
            Self::BankersRound => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Round `value` to `dp` fraction digits.
    ///
    /// The result never carries more than `dp` fraction digits.
    pub fn round(self, value: Decimal, dp: u32) -> Decimal {
        value.round_dp_with_strategy(dp, self.strategy())
    }
}
