//! Percentage computation with an explicit rounding policy.
//!
//! All arithmetic runs on [`rust_decimal::Decimal`]; floating-point inputs
//! are converted once, up front, and never multiplied as floats.

mod error;
mod percentage;
mod policy;

pub use error::ArithmeticError;
pub use percentage::{decimal_from_f64, percentage_of, percentage_of_float, percentage_of_minor};
pub use policy::RoundingPolicy;
