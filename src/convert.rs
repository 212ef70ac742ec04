//! Date conversion between canonical instants and wire-format text.
//!
//! The wire contract for all task date fields is the fixed pattern
//! `yyyy-MM-dd HH:mm <zone-abbreviation>`, e.g. `2024-03-15 14:30 GMT`.
//! Both directions preserve the absolute instant; only the displayed offset
//! changes. The timezone is always an explicit parameter.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::error::ConvertError;
use crate::timezone::ClientTimezone;

/// Date and time portion of the wire pattern, without the zone token.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Byte length of a rendered stamp ("2024-03-15 14:30"). The pattern is
/// zero-padded; chrono alone would also accept "2024-3-5 4:05", which cannot
/// round-trip to identical text.
const STAMP_LEN: usize = 16;

/// Parse wire-format text and re-express it in the requested timezone.
///
/// `None` input means the field was never provided and yields `Ok(None)`.
/// Text that is present but does not match the pattern is an error, never a
/// silent `None`; the caller decides how to surface it.
pub fn parse_and_convert(
    timezone: &ClientTimezone,
    text: Option<&str>,
) -> Result<Option<DateTime<FixedOffset>>, ConvertError> {
    let Some(text) = text else {
        return Ok(None);
    };

    let (stamp, zone) = text
        .rsplit_once(' ')
        .ok_or_else(|| ConvertError::MalformedText {
            text: text.to_string(),
            source: None,
        })?;
    if stamp.len() != STAMP_LEN {
        return Err(ConvertError::MalformedText {
            text: text.to_string(),
            source: None,
        });
    }
    let naive = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).map_err(|e| {
        ConvertError::MalformedText {
            text: text.to_string(),
            source: Some(e),
        }
    })?;
    let source_zone = ClientTimezone::named(zone)?;

    let instant = DateTime::<FixedOffset>::from_naive_utc_and_offset(
        naive - source_zone.offset(),
        source_zone.offset(),
    );
    Ok(Some(instant.with_timezone(&timezone.offset())))
}

/// Re-express an instant in the requested timezone and render the wire
/// pattern.
pub fn convert_and_format(instant: &DateTime<FixedOffset>, timezone: &ClientTimezone) -> String {
    let local = instant.with_timezone(&timezone.offset());
    format!("{} {}", local.format(STAMP_FORMAT), timezone.abbreviation())
}
