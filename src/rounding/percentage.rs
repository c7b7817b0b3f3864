//! Exact-decimal percentage arithmetic.
//!
//! Amounts and percentages are converted to [`Decimal`] before any
//! multiplication, so large amounts keep every digit up to the point where
//! the rounding policy is applied.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ArithmeticError;
use super::policy::RoundingPolicy;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `amount * percent / 100`, rounded to `dp` fraction digits.
///
/// ```
/// use dough::rounding::{RoundingPolicy, percentage_of};
/// use rust_decimal_macros::dec;
///
/// let tip = percentage_of(dec!(84.50), dec!(18), 2, RoundingPolicy::RoundHalfUp).unwrap();
/// assert_eq!(tip, dec!(15.21));
/// ```
pub fn percentage_of(
    amount: Decimal,
    percent: Decimal,
    dp: u32,
    policy: RoundingPolicy,
) -> Result<Decimal, ArithmeticError> {
    let product = amount
        .checked_mul(percent)
        .ok_or(ArithmeticError::Overflow)?;
    let share = product
        .checked_div(ONE_HUNDRED)
        .ok_or(ArithmeticError::Overflow)?;
    Ok(policy.round(share, dp))
}

/// Percentage of an integer amount, e.g. a count of minor units.
pub fn percentage_of_minor(
    amount: i64,
    percent: f64,
    dp: u32,
    policy: RoundingPolicy,
) -> Result<Decimal, ArithmeticError> {
    percentage_of(Decimal::from(amount), decimal_from_f64(percent)?, dp, policy)
}

/// Percentage of a floating display amount, e.g. `17.99` dollars.
pub fn percentage_of_float(
    amount: f64,
    percent: f64,
    dp: u32,
    policy: RoundingPolicy,
) -> Result<Decimal, ArithmeticError> {
    percentage_of(decimal_from_f64(amount)?, decimal_from_f64(percent)?, dp, policy)
}

/// Convert through the shortest decimal text that round-trips to `value`,
/// so `0.1` becomes exactly `0.1` rather than its binary expansion.
pub fn decimal_from_f64(value: f64) -> Result<Decimal, ArithmeticError> {
    if !value.is_finite() {
        return Err(ArithmeticError::NonFinite(value));
    }
    Decimal::from_str(&value.to_string()).map_err(|_| ArithmeticError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn whole_percentage() {
        let result = percentage_of_minor(9999, 100.0, 2, RoundingPolicy::RoundHalfUp).unwrap();
        assert_eq!(result, dec!(9999.00));
        assert_eq!(format!("{result:.2}"), "9999.00");
    }

    #[test]
    fn bankers_ties() {
        // 1% of 150 is 1.5, 1% of 250 is 2.5.
        let p = RoundingPolicy::BankersRound;
        assert_eq!(percentage_of_minor(150, 1.0, 0, p).unwrap(), dec!(2));
        assert_eq!(percentage_of_minor(250, 1.0, 0, p).unwrap(), dec!(2));
        assert_eq!(percentage_of_minor(350, 1.0, 0, p).unwrap(), dec!(4));
    }

    #[test]
    fn policies_diverge_on_ties() {
        let cases = [
            (RoundingPolicy::RoundHalfUp, dec!(3)),
            (RoundingPolicy::Floor, dec!(2)),
            (RoundingPolicy::Ceil, dec!(3)),
            (RoundingPolicy::BankersRound, dec!(2)),
        ];
        for (policy, expected) in cases {
            assert_eq!(percentage_of_minor(250, 1.0, 0, policy).unwrap(), expected);
        }
        let cases = [
            (RoundingPolicy::RoundHalfUp, dec!(-3)),
            (RoundingPolicy::Floor, dec!(-3)),
            (RoundingPolicy::Ceil, dec!(-2)),
            (RoundingPolicy::BankersRound, dec!(-2)),
        ];
        for (policy, expected) in cases {
            assert_eq!(percentage_of_minor(-250, 1.0, 0, policy).unwrap(), expected);
        }
    }

    #[test]
    fn float_inputs_are_taken_at_face_value() {
        // 0.1 + 0.2 style noise must not leak into the result.
        let r = percentage_of_float(0.1, 300.0, 2, RoundingPolicy::RoundHalfUp).unwrap();
        assert_eq!(r, dec!(0.30));
        let r = percentage_of_float(1.005, 100.0, 2, RoundingPolicy::RoundHalfUp).unwrap();
        assert_eq!(r, dec!(1.01));
        let r = percentage_of_float(17.99, 7.25, 2, RoundingPolicy::Floor).unwrap();
        assert_eq!(r, dec!(1.30));
    }

    #[test]
    fn large_amounts_keep_precision() {
        // 12.345% of 98,765,432,109,876 = 12,192,592,593,964.1922
        let r = percentage_of_minor(98_765_432_109_876, 12.345, 4, RoundingPolicy::RoundHalfUp)
            .unwrap();
        assert_eq!(r, dec!(12192592593964.1922));
        let r = percentage_of_minor(98_765_432_109_876, 12.345, 2, RoundingPolicy::Ceil).unwrap();
        assert_eq!(r, dec!(12192592593964.20));
    }

    #[test]
    fn non_finite_inputs() {
        assert!(matches!(
            percentage_of_float(f64::NAN, 10.0, 2, RoundingPolicy::Floor),
            Err(ArithmeticError::NonFinite(_))
        ));
        assert!(matches!(
            percentage_of_minor(100, f64::INFINITY, 2, RoundingPolicy::Floor),
            Err(ArithmeticError::NonFinite(_))
        ));
    }

    #[test]
    fn out_of_range_inputs() {
        assert_eq!(
            percentage_of_float(1e40, 10.0, 2, RoundingPolicy::Floor),
            Err(ArithmeticError::Overflow)
        );
        assert_eq!(
            percentage_of(Decimal::MAX, dec!(200), 2, RoundingPolicy::Floor),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn shortest_float_text() {
        assert_eq!(decimal_from_f64(0.1).unwrap(), dec!(0.1));
        assert_eq!(decimal_from_f64(-17.99).unwrap(), dec!(-17.99));
        assert_eq!(decimal_from_f64(1e15).unwrap(), dec!(1000000000000000));
    }
}
