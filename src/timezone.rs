//! Client-requested timezones for wire-format rendering.
//!
//! External clients identify a timezone by a short zone abbreviation
//! ("UTC", "CET", "PST") or a numeric offset ("+05:30", "-0800"). Wire-format
//! dates always render the abbreviation, never an IANA identifier.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};

use crate::error::ConvertError;

/// Known zone abbreviations and their UTC offsets, in seconds east.
///
/// Ambiguous abbreviations resolve to one reading: CST is US Central, IST is
/// India, AST is Atlantic. Clients needing another reading pass a numeric
/// offset instead.
const ZONE_TABLE: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("WET", 0),
    ("WEST", 3600),
    ("BST", 3600),
    ("CET", 3600),
    ("CEST", 2 * 3600),
    ("EET", 2 * 3600),
    ("EEST", 3 * 3600),
    ("MSK", 3 * 3600),
    ("AST", -4 * 3600),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("AKST", -9 * 3600),
    ("AKDT", -8 * 3600),
    ("HST", -10 * 3600),
    ("IST", 5 * 3600 + 1800),
    ("SGT", 8 * 3600),
    ("HKT", 8 * 3600),
    ("JST", 9 * 3600),
    ("KST", 9 * 3600),
    ("ACST", 9 * 3600 + 1800),
    ("AEST", 10 * 3600),
    ("AEDT", 11 * 3600),
    ("NZST", 12 * 3600),
    ("NZDT", 13 * 3600),
];

/// A timezone requested by an API client.
///
/// Pairs the abbreviation rendered on the wire with the fixed UTC offset used
/// to re-express instants. Constructed per request and threaded explicitly
/// through every conversion, so there is no bound-timezone state to forget to
/// set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTimezone {
    abbreviation: String,
    offset: FixedOffset,
}

impl ClientTimezone {
    /// Resolve a zone abbreviation or numeric offset form.
    pub fn named(name: &str) -> Result<Self, ConvertError> {
        let offset =
            resolve_zone(name).ok_or_else(|| ConvertError::UnknownZone(name.to_string()))?;
        Ok(Self {
            abbreviation: name.to_string(),
            offset,
        })
    }

    /// The UTC timezone.
    pub fn utc() -> Self {
        Self {
            abbreviation: "UTC".to_string(),
            offset: Utc.fix(),
        }
    }

    /// Short zone name rendered on the wire.
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Fixed UTC offset used for instant re-expression.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl fmt::Display for ClientTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation)
    }
}

impl FromStr for ClientTimezone {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::named(s)
    }
}

fn resolve_zone(name: &str) -> Option<FixedOffset> {
    if let Some(&(_, secs)) = ZONE_TABLE.iter().find(|(abbr, _)| *abbr == name) {
        return FixedOffset::east_opt(secs);
    }
    parse_numeric_offset(name)
}

/// Parse "+HH:MM", "+HHMM", or "+HH" style offsets.
fn parse_numeric_offset(name: &str) -> Option<FixedOffset> {
    let (sign, rest) = match name.as_bytes().first()? {
        b'+' => (1, &name[1..]),
        b'-' => (-1, &name[1..]),
        _ => return None,
    };
    let digits = match rest.split_once(':') {
        Some((hours, minutes)) if hours.len() == 2 && minutes.len() == 2 => {
            format!("{}{}", hours, minutes)
        }
        Some(_) => return None,
        None => rest.to_string(),
    };
    // Digit groups must be plain ASCII digits; `str::parse` alone would
    // accept embedded signs ("+-5") and non-ASCII input would make the
    // byte-index slicing below panic.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
