//! Timestamp normalizer — Apache `[DD/Mon/YYYY:HH:MM:SS ±ZZZZ]` to epoch
//! seconds.
//!
//! The calendar part is first read as an instant on the host's clock, using
//! the host offset the normalizer was built with, and corrected back by that
//! same offset. The stated `±ZZZZ` offset is then removed to land on UTC.
//! The host offset is a fixed standard-time value: daylight saving on the
//! host is never consulted.

use chrono::{FixedOffset, NaiveDateTime, TimeZone};

/// `DD/Mon/YYYY:HH:MM:SS ±ZZZZ`
const SHAPE: &[u8] = b"dd/aaa/dddd:dd:dd:dd sdddd";
const CALENDAR_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";
const CALENDAR_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("timestamp {0:?} does not match DD/Mon/YYYY:HH:MM:SS +ZZZZ")]
    Shape(String),
    #[error("timestamp {raw:?} is not a calendar instant: {source}")]
    Calendar {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid UTC offset {0:?}")]
    Offset(String),
}

/// Converts raw log timestamps to epoch seconds in UTC.
#[derive(Debug, Clone, Copy)]
pub struct TimestampNormalizer {
    host_offset: FixedOffset,
}

impl Default for TimestampNormalizer {
    fn default() -> Self {
        Self::utc_host()
    }
}

impl TimestampNormalizer {
    /// A normalizer for a host whose standard time is `host_offset`.
    pub fn new(host_offset: FixedOffset) -> Self {
        Self { host_offset }
    }

    /// A normalizer for a host running on UTC.
    pub fn utc_host() -> Self {
        Self::new(FixedOffset::east_opt(0).expect("zero offset is always in range"))
    }

    pub fn host_offset(&self) -> FixedOffset {
        self.host_offset
    }

    /// Parse `raw` and return seconds since the epoch.
    pub fn to_epoch(&self, raw: &str) -> Result<i64, TimestampError> {
        if !matches_shape(raw) {
            return Err(TimestampError::Shape(raw.to_string()));
        }
        let (calendar, zone) = (&raw[..CALENDAR_LEN], &raw[CALENDAR_LEN + 1..]);

        let naive = NaiveDateTime::parse_from_str(calendar, CALENDAR_FORMAT).map_err(|source| {
            TimestampError::Calendar {
                raw: raw.to_string(),
                source,
            }
        })?;
        let source_offset = parse_offset_secs(zone)?;

        let on_host = self
            .host_offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| TimestampError::Shape(raw.to_string()))?;
        let host_corrected = on_host.timestamp() + i64::from(self.host_offset.local_minus_utc());

        Ok(host_corrected - source_offset)
    }

    /// [`to_epoch`](Self::to_epoch) rendered as a decimal string.
    pub fn normalize(&self, raw: &str) -> Result<String, TimestampError> {
        self.to_epoch(raw).map(|secs| secs.to_string())
    }
}

/// Parse a `±HHMM` offset into signed seconds east of UTC.
///
/// Minutes are not range checked, matching what web servers emit in the
/// wild.
pub fn parse_offset_secs(zone: &str) -> Result<i64, TimestampError> {
    let bytes = zone.as_bytes();
    if bytes.len() != 5 || !bytes[1..].iter().all(u8::is_ascii_digit) {
        return Err(TimestampError::Offset(zone.to_string()));
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(TimestampError::Offset(zone.to_string())),
    };
    let digit = |i: usize| i64::from(bytes[i] - b'0');
    let hours = 10 * digit(1) + digit(2);
    let mins = 10 * digit(3) + digit(4);
    Ok(sign * (hours * 3600 + mins * 60))
}

/// Parse a `±HHMM` offset into a [`FixedOffset`], rejecting offsets of a day
/// or more.
pub fn parse_fixed_offset(zone: &str) -> Result<FixedOffset, TimestampError> {
    let secs = parse_offset_secs(zone)?;
    i32::try_from(secs)
        .ok()
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| TimestampError::Offset(zone.to_string()))
}

fn matches_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == SHAPE.len()
        && bytes.iter().zip(SHAPE).all(|(&b, &pat)| match pat {
            b'd' => b.is_ascii_digit(),
            b'a' => b.is_ascii_alphabetic(),
            b's' => b == b'+' || b == b'-',
            literal => b == literal,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
