use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use data_error::{Result, StoreError};

/// Lifetime of a time-aware record, in whole seconds.
pub type Ttl = u64;

/// An instant on the store's clock.
///
/// Parsed from ISO-8601 local date-time text such as `2021-07-01T12:00:00`
/// and rendered back in the same shape.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Instant `seconds` after this one,
    /// or `None` if it is not representable.
    pub fn checked_add_seconds(&self, seconds: u64) -> Option<Self> {
        let seconds = i64::try_from(seconds).ok()?;
        let delta = TimeDelta::try_seconds(seconds)?;
        self.0.checked_add_signed(delta).map(Self)
    }
}

impl FromStr for Timestamp {
    type Err = StoreError;

    /// Accepts local date-times with a `T` or space separator.
    /// RFC 3339 text carrying an offset is converted to UTC.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        text.parse::<NaiveDateTime>()
            .or_else(|_| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
            })
            .or_else(|_| {
                DateTime::parse_from_rfc3339(text).map(|dt| dt.naive_utc())
            })
            .map(Self)
            .map_err(|err| {
                StoreError::Parse(format!("invalid timestamp {:?}: {}", s, err))
            })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.nanosecond() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
        }
    }
}

/// A time-naive file entry. Only the size token is kept.
///
/// Copies in the naive namespace share one instance between names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub size: String,
}

impl FileRecord {
    pub fn new(size: impl Into<String>) -> Self {
        Self { size: size.into() }
    }
}

/// A time-aware file entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedRecord {
    pub size: String,
    pub created_at: Timestamp,
    pub ttl: Option<Ttl>,
}

impl TimedRecord {
    pub fn new(
        size: impl Into<String>,
        created_at: Timestamp,
        ttl: Option<Ttl>,
    ) -> Self {
        Self {
            size: size.into(),
            created_at,
            ttl,
        }
    }

    /// Last instant at which the record is still visible.
    /// Records without a ttl, or whose expiry overflows the clock,
    /// never expire.
    pub fn expires_at(&self) -> Option<Timestamp> {
        self.ttl
            .and_then(|ttl| self.created_at.checked_add_seconds(ttl))
    }

    /// The expiry instant itself is still valid.
    pub fn is_expired(&self, at: Timestamp) -> bool {
        self.expires_at()
            .map_or(false, |expiry| at > expiry)
    }

    /// The record that a copy performed at `at` binds to its destination.
    pub fn copied_at(&self, at: Timestamp) -> Self {
        Self {
            size: self.size.clone(),
            created_at: at,
            ttl: self.ttl,
        }
    }
}
