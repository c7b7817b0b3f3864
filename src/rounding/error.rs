use thiserror::Error;

/// Errors from percentage and rounding arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ArithmeticError {
    /// NaN or an infinity was passed where a number was expected.
    #[error("non-finite input: {0}")]
    NonFinite(f64),

    /// A value or intermediate result exceeds the decimal range.
    #[error("arithmetic overflow")]
    Overflow,
}
