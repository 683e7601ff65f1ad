//! Lenient (de)serialization of persisted timestamps.
//!
//! Files are always written as naive local ISO-8601 values. Older data may
//! carry an explicit UTC offset, or a full date-time where only a date is
//! stored; both are accepted on read.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a timestamp, converting offset-carrying values to local time.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse a calendar date; a trailing time component is ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok())
}

/// `NaiveDateTime` fields.
pub mod datetime {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_datetime(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// `Option<NaiveDate>` fields.
pub mod optional_date {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => s.serialize_some(&date.format(DATE_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naive_datetime() {
        let parsed = parse_datetime("2024-03-05T10:20:30.5").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_milli_opt(10, 20, 30, 500)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_datetime_with_offset() {
        assert!(parse_datetime("2024-03-05T10:20:30.1234567+08:00").is_some());
    }

    #[test]
    fn test_parse_date_ignores_time() {
        assert_eq!(
            parse_date("1990-05-01T00:00:00"),
            NaiveDate::from_ymd_opt(1990, 5, 1)
        );
        assert_eq!(parse_date("1990-05-01"), NaiveDate::from_ymd_opt(1990, 5, 1));
        assert_eq!(parse_date("garbage"), None);
    }
}
