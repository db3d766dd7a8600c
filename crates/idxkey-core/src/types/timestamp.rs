use chrono::{DateTime, TimeZone, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Timestamp
/// (in milliseconds since the unix epoch)
///
/// Dates before the epoch are negative.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    /// Construct from milliseconds.
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    /// Construct from seconds (saturating at the representable bounds).
    #[must_use]
    pub const fn from_seconds(secs: i64) -> Self {
        Self(secs.saturating_mul(1_000))
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt =
            DateTime::parse_from_rfc3339(s).map_err(|e| format!("timestamp parse error: {e}"))?;

        Ok(Self(dt.timestamp_millis()))
    }

    pub fn parse_flexible(s: &str) -> Result<Self, String> {
        // Try integer milliseconds
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self(n));
        }

        // Try RFC3339
        Self::parse_rfc3339(s)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Millisecond value as the number the key encoder orders by.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Convert into a UTC datetime, if the millisecond value is in chrono's range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

///
/// TESTS
///
