//! Flight entity representing a single scheduled flight.

use super::FlightDate;

/// A stored flight record.
///
/// `id` is assigned by the store on insert and never changes afterwards,
/// except through an explicit replace addressed by that same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub id: i64,
    pub from: String,
    pub to: String,
    pub date: FlightDate,
}

impl Flight {
    /// Creates a new Flight instance.
    pub fn new(id: i64, from: String, to: String, date: FlightDate) -> Self {
        Self { id, from, to, date }
    }
}

/// Input data for creating or replacing a flight.
///
/// Carries no id: the store decides the id on insert and the caller's path
/// id wins on replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlight {
    pub from: String,
    pub to: String,
    pub date: FlightDate,
}

impl NewFlight {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        date: impl Into<FlightDate>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            date: date.into(),
        }
    }

    /// Binds the input to an id, producing a full record.
    pub fn with_id(self, id: i64) -> Flight {
        Flight::new(id, self.from, self.to, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_flight_creation() {
        let date: FlightDate = "2024-01-01T00:00:00".parse().unwrap();
        let flight = Flight::new(1, "VIE".to_string(), "LHR".to_string(), date.clone());

        assert_eq!(flight.id, 1);
        assert_eq!(flight.from, "VIE");
        assert_eq!(flight.to, "LHR");
        assert_eq!(flight.date, date);
    }

    #[test]
    fn test_new_flight_with_id() {
        let date = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let flight = NewFlight::new("LHR", "JFK", date).with_id(42);

        assert_eq!(flight.id, 42);
        assert_eq!(flight.from, "LHR");
        assert_eq!(flight.to, "JFK");
        assert_eq!(flight.date.as_str(), "2024-02-01T00:00:00Z");
    }
}
