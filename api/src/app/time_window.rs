//! Lookup window parsing
//!
//! Turns the raw `start`/`end` query values into a validated pair of
//! offset-aware instants.

use chrono::{DateTime, FixedOffset};

use crate::error::TimeParamError;

/// Longest window, in whole hours, that can still be priced
pub const MAX_WINDOW_HOURS: i64 = 24;

/// A parsed lookup window. Each instant keeps the offset it was given with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl TimeWindow {
    /// Validate both parameters, reporting `start` problems first.
    pub fn from_params(start: Option<&str>, end: Option<&str>) -> Result<Self, TimeParamError> {
        let start = parse_param("start", start)?;
        let end = parse_param("end", end)?;
        Ok(Self { start, end })
    }

    /// Hours from start to end, truncated toward zero
    pub fn whole_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }

    /// Whether the window can be priced at all.
    ///
    /// Windows where `end` precedes `start` by less than an hour truncate to
    /// zero and are still priced.
    pub fn is_priceable(&self) -> bool {
        (0..=MAX_WINDOW_HOURS).contains(&self.whole_hours())
    }
}

fn parse_param(
    name: &'static str,
    value: Option<&str>,
) -> Result<DateTime<FixedOffset>, TimeParamError> {
    let value = value.ok_or(TimeParamError::Missing(name))?;
    if value.is_empty() {
        return Err(TimeParamError::Empty(name));
    }
    parse_iso8601(value).ok_or(TimeParamError::InvalidFormat(name))
}

/// Parse an ISO-8601 combined date-time with an offset or `Z`.
///
/// The extended profile (`2015-07-01T07:00:00-05:00`) goes through RFC 3339;
/// basic offsets (`+0500`) are accepted as well.
pub fn parse_iso8601(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
}
