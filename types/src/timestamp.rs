//! Lenient timestamp (de)serialization.
//!
//! The backend writes `created_at` either as RFC 3339 or as a naive ISO-8601
//! date-time with no offset. Naive values are taken to be UTC.

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use serde::{Deserialize, Deserializer, Serializer};

pub fn parse(s: &str) -> Result<Timestamp, jiff::Error> {
    match s.parse::<Timestamp>() {
        Ok(ts) => Ok(ts),
        Err(e) => match s.parse::<DateTime>() {
            Ok(dt) => Ok(dt.to_zoned(TimeZone::UTC)?.timestamp()),
            Err(_) => Err(e),
        },
    }
}

pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(ts)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}
