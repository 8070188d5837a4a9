//! Timestamp conversion between Unix time and calendar dates

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::domain::record::parse_leading_int;
use crate::domain::result::ConvertError;

/// Inputs longer than this many characters are read as milliseconds
const SECONDS_MAX_LEN: usize = 10;

/// Local date-time layouts accepted by [`convert_to_timestamp`]
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A point in time in both Unix units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnixTimestamp {
    pub seconds: i64,
    pub milliseconds: i64,
}

impl UnixTimestamp {
    pub fn from_millis(milliseconds: i64) -> Self {
        Self {
            seconds: milliseconds.div_euclid(1000),
            milliseconds,
        }
    }
}

/// Convert a Unix timestamp to a date
///
/// Inputs of up to 10 characters are seconds, longer ones milliseconds.
/// The length is the character count of the raw input, surrounding
/// whitespace included. Only the leading integer is read, so
/// `"1700000000abc"` still converts.
pub fn convert_to_date(input: &str) -> Result<DateTime<Utc>, ConvertError> {
    let value = parse_leading_int(input.trim()).ok_or(ConvertError::InvalidTimestamp)?;

    let millis = if input.chars().count() > SECONDS_MAX_LEN {
        value
    } else {
        value.checked_mul(1000).ok_or(ConvertError::InvalidTimestamp)?
    };

    DateTime::<Utc>::from_timestamp_millis(millis).ok_or(ConvertError::InvalidTimestamp)
}

/// Convert a calendar date or date-time to a Unix timestamp
///
/// Accepts RFC 3339, local `YYYY-MM-DDTHH:MM[:SS]` / `YYYY-MM-DD HH:MM[:SS]`,
/// and bare `YYYY-MM-DD`, which is taken as UTC midnight.
pub fn convert_to_timestamp(input: &str) -> Result<UnixTimestamp, ConvertError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::InvalidDate);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(UnixTimestamp::from_millis(dt.timestamp_millis()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or(ConvertError::InvalidDate)?;
        return Ok(UnixTimestamp::from_millis(midnight.and_utc().timestamp_millis()));
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or(ConvertError::InvalidDate)?;

    // Ambiguous local times (DST fold) resolve to the earlier instant
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or(ConvertError::InvalidDate)?;
    Ok(UnixTimestamp::from_millis(local.timestamp_millis()))
}
