//! Temporal values as they arrive from a date filter widget.

use chrono::{
    DateTime, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use chrono_tz::Tz;
use std::fmt;

/// Seconds added to an epoch timestamp to move it one day forward.
pub const SECONDS_PER_DAY: i64 = 86_400;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Either a wall-clock date-time or an epoch timestamp in seconds.
///
/// A zero timestamp is a real instant (1970-01-01T00:00:00Z), not an empty value;
/// absence is always modelled with `Option<Temporal>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temporal {
    Timestamp(i64),
    DateTime(NaiveDateTime),
}

impl Temporal {
    /// Moves a date-time to 00:00:00 of its day. Timestamps are left untouched.
    pub fn at_start_of_day(self) -> Self {
        match self {
            Temporal::DateTime(dt) => Temporal::DateTime(dt.date().and_time(NaiveTime::MIN)),
            other => other,
        }
    }

    /// Moves a date-time to 23:59:59 of its day. Timestamps are left untouched.
    pub fn at_end_of_day(self) -> Self {
        match self {
            Temporal::DateTime(dt) => dt
                .date()
                .and_hms_opt(23, 59, 59)
                .map_or(self, Temporal::DateTime),
            other => other,
        }
    }

    /// The same instant one day later: `+86400` seconds for timestamps,
    /// one calendar day for date-times. `None` on overflow.
    pub fn next_day(self) -> Option<Self> {
        match self {
            Temporal::Timestamp(ts) => ts.checked_add(SECONDS_PER_DAY).map(Temporal::Timestamp),
            Temporal::DateTime(dt) => dt.checked_add_days(Days::new(1)).map(Temporal::DateTime),
        }
    }

    /// Epoch seconds, reading date-times as wall-clock time in `tz`.
    /// `None` when the instant falls outside chrono's range.
    pub fn to_epoch(self, tz: &Tz) -> Option<i64> {
        match self {
            Temporal::Timestamp(ts) => Some(ts),
            Temporal::DateTime(dt) => local_to_epoch(dt, tz),
        }
    }

    /// Converts to the timestamp representation.
    pub fn into_timestamp(self, tz: &Tz) -> Option<Self> {
        self.to_epoch(tz).map(Temporal::Timestamp)
    }

    /// Parses the textual forms a date widget submits: epoch seconds,
    /// RFC 3339, `YYYY-MM-DD[ HH:MM[:SS]]` and the `T`-separated variants.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(ts) = input.parse::<i64>() {
            return Some(Temporal::Timestamp(ts));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Some(Temporal::DateTime(dt.naive_utc()));
        }

        DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(input, "%Y-%m-%d")
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
            .map(Temporal::DateTime)
    }
}

fn local_to_epoch(dt: NaiveDateTime, tz: &Tz) -> Option<i64> {
    match tz.from_local_datetime(&dt) {
        LocalResult::Single(local) => Some(local.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp()),
        // Either skipped by a DST jump or out of range once shifted to UTC.
        LocalResult::None => dt
            .checked_add_signed(TimeDelta::hours(1))
            .and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
            .map(|local| local.timestamp()),
    }
}

impl From<NaiveDateTime> for Temporal {
    fn from(dt: NaiveDateTime) -> Self {
        Temporal::DateTime(dt)
    }
}

impl From<i64> for Temporal {
    fn from(ts: i64) -> Self {
        Temporal::Timestamp(ts)
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temporal::Timestamp(ts) => write!(f, "{ts}"),
            Temporal::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}
