//! Point-in-time values with the CoinCap wire encoding
//!
//! Every timestamp the API emits (the envelope's top-level capture time and
//! the `updated`/`period`/`time` fields inside records) is a bare JSON
//! integer of milliseconds since the Unix epoch. [`Timestamp`] owns both
//! directions of that conversion so no endpoint reimplements it.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in time as reported by the CoinCap API.
///
/// Wraps [`chrono::DateTime<Utc>`]. The wire form is epoch milliseconds, so
/// anything below millisecond precision is lost on encode; decoding then
/// encoding an integer is exact in both directions.
///
/// Negative values (instants before 1970-01-01) are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Construct from milliseconds since the Unix epoch.
    ///
    /// Returns `None` for values outside chrono's representable range
    /// (roughly ±262,000 years).
    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Milliseconds since the Unix epoch, truncating sub-millisecond
    /// precision toward negative infinity.
    pub fn unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The current instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// The underlying UTC datetime.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.unix_millis())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Strictly an integer token. Strings and floats are rejected so a
        // malformed timestamp never decodes to a wrong instant.
        let millis = i64::deserialize(deserializer)?;
        Timestamp::from_unix_millis(millis).ok_or_else(|| {
            serde::de::Error::custom(format!("timestamp {millis} out of range"))
        })
    }
}
