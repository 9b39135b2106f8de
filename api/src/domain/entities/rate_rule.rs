//! Rate rule domain entity
//!
//! A rate rule prices parking for a set of weekdays inside an hour window,
//! in one timezone. The triple `(days, times, tz)` is the natural key.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A flat parking rate, keyed by day list, hour range and timezone
///
/// Field names are the persisted/wire shape:
/// `{"days": "mon,wed", "times": "0900-2100", "tz": "America/Chicago", "price": 1500}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRule {
    /// Comma separated weekday abbreviations, e.g. "mon,tues,thurs"
    pub days: String,
    /// Hour range encoded as "HHMM-HHMM"
    pub times: String,
    /// IANA timezone identifier
    pub tz: String,
    /// Price in minor currency units (cents)
    pub price: u32,
}

impl RateRule {
    /// Decode this rule's `times` field
    pub fn hour_range(&self) -> Result<HourRange, TimeRangeError> {
        self.times.parse()
    }

    /// Whether the day list contains the given day-match token, ignoring ASCII case
    pub fn applies_on(&self, token: &str) -> bool {
        self.days
            .to_ascii_lowercase()
            .contains(&token.to_ascii_lowercase())
    }
}

impl std::fmt::Display for RateRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} {} @ {}", self.days, self.times, self.tz, self.price)
    }
}

/// Errors decoding an encoded hour range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeRangeError {
    #[error("time value is not as per the standard: {0:?}")]
    Malformed(String),

    #[error("unparsable hour: {0:?}")]
    UnparsableHour(String),

    #[error("minutes are not supported: {0:?}")]
    NonZeroMinutes(String),

    #[error("hour out of range: {0}")]
    HourOutOfRange(u32),
}

/// Latest hour a boundary may name; "2400" closes out a day.
const MAX_BOUNDARY_HOUR: u32 = 24;

/// Decoded hour boundaries of a rate rule, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    /// Whether a window starting at `start_hour` and ending at `end_hour` fits.
    ///
    /// No wraparound: a range with `end < start` never matches.
    pub fn covers(&self, start_hour: u32, end_hour: u32) -> bool {
        self.start <= self.end && start_hour >= self.start && end_hour <= self.end
    }
}

impl std::str::FromStr for HourRange {
    type Err = TimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeRangeError::Malformed(s.to_string());

        let (start, end) = s.split_once('-').ok_or_else(malformed)?;
        if start.is_empty() || end.is_empty() || end.contains('-') {
            return Err(malformed());
        }

        Ok(HourRange {
            start: decode_boundary(start)?,
            end: decode_boundary(end)?,
        })
    }
}

/// Decode one side of an encoded range into an hour.
///
/// Accepts "HHMM" with a "00" minute field, or a bare "H"/"HH".
fn decode_boundary(part: &str) -> Result<u32, TimeRangeError> {
    let unparsable = || TimeRangeError::UnparsableHour(part.to_string());

    if !part.is_ascii() {
        return Err(unparsable());
    }

    let hour = match part.len() {
        4 => {
            let (hour, minutes) = part.split_at(2);
            if minutes != "00" {
                return Err(if minutes.bytes().all(|b| b.is_ascii_digit()) {
                    TimeRangeError::NonZeroMinutes(part.to_string())
                } else {
                    unparsable()
                });
            }
            hour
        }
        1 | 2 => part,
        _ => return Err(unparsable()),
    };

    if !hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unparsable());
    }
    let hour: u32 = hour.parse().map_err(|_| unparsable())?;
    if hour > MAX_BOUNDARY_HOUR {
        return Err(TimeRangeError::HourOutOfRange(hour));
    }
    Ok(hour)
}

/// Day-match token: the first two letters of the lowercase English weekday name
pub fn day_token(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mo",
        Weekday::Tue => "tu",
        Weekday::Wed => "we",
        Weekday::Thu => "th",
        Weekday::Fri => "fr",
        Weekday::Sat => "sa",
        Weekday::Sun => "su",
    }
}

/// Seed document: `{"rates": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateSheet {
    pub rates: Vec<RateRule>,
}
