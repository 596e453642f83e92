//! Departure date of a flight.
//!
//! The store never interprets the date. It only has to be a well-formed
//! ISO-8601 date-time, either with an offset (`2024-01-01T08:00:00+01:00`,
//! `2024-01-01T07:00:00Z`) or without one (`2024-01-01T08:00:00`). The text
//! is kept exactly as received so it is returned unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Error returned for text that is not an ISO-8601 date-time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an ISO-8601 date-time")]
pub struct InvalidFlightDate(pub String);

/// A validated ISO-8601 date-time, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlightDate(String);

impl FlightDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the date carries a UTC offset.
    pub fn has_offset(&self) -> bool {
        DateTime::parse_from_rfc3339(&self.0).is_ok()
    }
}

fn is_date_time(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok() || NaiveDateTime::from_str(s).is_ok()
}

impl FromStr for FlightDate {
    type Err = InvalidFlightDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_date_time(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidFlightDate(s.to_string()))
        }
    }
}

impl TryFrom<String> for FlightDate {
    type Error = InvalidFlightDate;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_date_time(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidFlightDate(value))
        }
    }
}

impl From<FlightDate> for String {
    fn from(date: FlightDate) -> Self {
        date.0
    }
}

impl From<DateTime<Utc>> for FlightDate {
    fn from(date: DateTime<Utc>) -> Self {
        Self(date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// The Unix epoch, used for drafts that have not been given a date yet.
impl Default for FlightDate {
    fn default() -> Self {
        DateTime::<Utc>::UNIX_EPOCH.into()
    }
}

impl fmt::Display for FlightDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accepts_offset_forms() {
        for text in [
            "2024-01-01T00:00:00Z",
            "2024-01-01T00:00:00.000+01:00",
            "2024-06-30T23:59:59-05:30",
        ] {
            let date: FlightDate = text.parse().unwrap();
            assert_eq!(date.as_str(), text);
            assert!(date.has_offset());
        }
    }

    #[test]
    fn test_accepts_local_date_time() {
        let date: FlightDate = "2024-01-01T00:00:00".parse().unwrap();
        assert_eq!(date.to_string(), "2024-01-01T00:00:00");
        assert!(!date.has_offset());

        let date: FlightDate = "2024-01-01T08:15:30.250".parse().unwrap();
        assert_eq!(date.as_str(), "2024-01-01T08:15:30.250");
    }

    #[test]
    fn test_rejects_non_dates() {
        for text in ["", "tomorrow", "2024-13-01T00:00:00", "2024-01-01"] {
            assert_eq!(
                text.parse::<FlightDate>(),
                Err(InvalidFlightDate(text.to_string()))
            );
        }
    }

    #[test]
    fn test_json_keeps_text_unchanged() {
        let date: FlightDate = serde_json::from_str(r#""2024-01-01T00:00:00.000+01:00""#).unwrap();
        assert_eq!(
            serde_json::to_string(&date).unwrap(),
            r#""2024-01-01T00:00:00.000+01:00""#
        );

        assert!(serde_json::from_str::<FlightDate>(r#""not a date""#).is_err());
    }

    #[test]
    fn test_from_utc() {
        let date = FlightDate::from(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 0).unwrap());
        assert_eq!(date.as_str(), "2024-05-06T07:08:00Z");
    }

    #[test]
    fn test_default_is_epoch() {
        assert_eq!(FlightDate::default().as_str(), "1970-01-01T00:00:00Z");
    }
}
