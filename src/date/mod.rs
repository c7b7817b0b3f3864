//! Card expiry dates and timezone details.

mod expiry;
mod timezone;

pub use expiry::{ExpiryError, format_expiry, parse_expiry};
pub use timezone::{TimezoneDetails, TimezoneError, timezone_details, timezone_details_at};
