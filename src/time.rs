//! Epoch-millisecond to ISO-8601 conversion.
//!
//! Druid timestamps arrive as milliseconds since the Unix epoch, sometimes
//! as JSON numbers and sometimes as strings. Both forms convert to the same
//! naive ISO-8601 string in the host's local timezone.

use chrono::{DateTime, Local};

use crate::error::{DruidRsError, Result};

/// Convert epoch milliseconds to an ISO-8601 local-time string.
///
/// Whole seconds format as `YYYY-MM-DDTHH:MM:SS`; a non-zero millisecond
/// remainder appends a `.mmm` fraction. Out-of-range input is an error.
pub fn iso_from_epoch_millis(millis: i64) -> Result<String> {
    let date_time: DateTime<Local> = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| {
            DruidRsError::InvalidTimestamp(format!("epoch millis out of range: {}", millis))
        })?
        .with_timezone(&Local);

    if millis.rem_euclid(1000) == 0 {
        Ok(date_time.format("%Y-%m-%dT%H:%M:%S").to_string())
    } else {
        Ok(date_time.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
    }
}

/// Parse a string of epoch milliseconds and convert it like
/// [`iso_from_epoch_millis`].
pub fn iso_from_epoch_str(epoch: &str) -> Result<String> {
    let millis: i64 = epoch.trim().parse().map_err(|_| {
        DruidRsError::InvalidTimestamp(format!("not an epoch millis integer: '{}'", epoch))
    })?;
    iso_from_epoch_millis(millis)
}
