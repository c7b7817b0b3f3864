use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Errors from card expiry parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExpiryError {
    /// Expiry must be `MMYY` or `MM/YY`.
    #[error("expiry must be 4 or 5 characters long")]
    BadLength,

    #[error("invalid month in expiry")]
    BadMonth,

    /// Years outside 2001..=2050 are rejected.
    #[error("invalid year in expiry")]
    BadYear,
}

const FIRST_YEAR: i32 = 2001;
const LAST_YEAR: i32 = 2050;

/// Parse a card expiry (`MMYY` or `MM/YY`) into the last day of that month.
///
/// ```
/// use chrono::NaiveDate;
/// use dough::date::parse_expiry;
///
/// assert_eq!(parse_expiry("02/24"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// ```
pub fn parse_expiry(expiry: &str) -> Result<NaiveDate, ExpiryError> {
    let (month, year) = match expiry.len() {
        4 => (expiry.get(..2), expiry.get(2..)),
        5 => (expiry.get(..2), expiry.get(3..)),
        _ => return Err(ExpiryError::BadLength),
    };

    let month = month
        .and_then(two_digits)
        .filter(|m| (1..=12).contains(m))
        .ok_or(ExpiryError::BadMonth)?;
    let year = year
        .and_then(two_digits)
        .map(|y| 2000 + y as i32)
        .filter(|y| (FIRST_YEAR..=LAST_YEAR).contains(y))
        .ok_or(ExpiryError::BadYear)?;

    last_day_of_month(year, month).ok_or(ExpiryError::BadMonth)
}

/// Render a date as a card expiry, `MM/YY`.
pub fn format_expiry(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.year().rem_euclid(100))
}

fn two_digits(s: &str) -> Option<u32> {
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
