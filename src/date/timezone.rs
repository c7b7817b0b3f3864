use chrono::{DateTime, Offset, TimeDelta, Utc};
use chrono_tz::{OffsetComponents, Tz};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from timezone lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimezoneError {
    /// The name is not an IANA timezone.
    #[error("unknown time zone '{0}'")]
    Unknown(String),
}

/// Offset and DST information for a timezone at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneDetails {
    /// Zone abbreviation in effect, e.g. `MST` or `AKDT`.
    pub abbreviation: String,
    /// Whether the UTC offset is a whole number of hours.
    pub is_hourly_offset: bool,
    /// UTC offset in minutes, negative west of Greenwich.
    pub offset_minutes: i32,
    /// Whether daylight saving time is in effect.
    pub is_dst: bool,
}

/// Details for the IANA timezone `name` right now.
pub fn timezone_details(name: &str) -> Result<TimezoneDetails, TimezoneError> {
    timezone_details_at(name, Utc::now())
}

/// Details for the IANA timezone `name` at `instant`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use dough::date::timezone_details_at;
///
/// let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let berlin = timezone_details_at("Europe/Berlin", winter).unwrap();
/// assert_eq!(berlin.abbreviation, "CET");
/// assert_eq!(berlin.offset_minutes, 60);
/// assert!(!berlin.is_dst);
/// ```
pub fn timezone_details_at(
    name: &str,
    instant: DateTime<Utc>,
) -> Result<TimezoneDetails, TimezoneError> {
    let tz: Tz = name.parse().map_err(|_| {
        log::debug!("unknown time zone {name:?}");
        TimezoneError::Unknown(name.to_string())
    })?;

    let local = instant.with_timezone(&tz);
    let offset = local.offset();
    let offset_seconds = offset.fix().local_minus_utc();

    Ok(TimezoneDetails {
        abbreviation: local.format("%Z").to_string(),
        is_hourly_offset: offset_seconds % 3600 == 0,
        offset_minutes: offset_seconds / 60,
        is_dst: offset.dst_offset() != TimeDelta::zero(),
    })
}
