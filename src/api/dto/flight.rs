//! DTOs for the flight endpoints.
//!
//! The same JSON shape travels in both directions:
//!
//! ```json
//! { "id": 1, "from": "VIE", "to": "LHR", "date": "2024-01-01T00:00:00Z" }
//! ```
//!
//! On requests `id` is optional and never trusted: create ignores it and
//! replace overrides it with the path id. `date` may also be sent without an
//! offset (`2024-01-01T00:00:00`) and is echoed back exactly as sent.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Flight, FlightDate, NewFlight};
use crate::domain::flight_query::FlightFilter;
use crate::error::AppError;

/// Message returned when a request body cannot be parsed into a flight.
pub const INVALID_FLIGHT_MESSAGE: &str = "Object is not a valid Flight.";

/// Wire representation of a flight.
///
/// `id` is `None` for drafts that have never been stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub from: String,
    pub to: String,
    pub date: FlightDate,
}

impl FlightPayload {
    /// Parses an untyped request body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedInput`] carrying the parser diagnostic if the
    /// body is not a JSON object of the expected shape.
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body)
            .map_err(|e| AppError::malformed(INVALID_FLIGHT_MESSAGE, e.to_string()))
    }

    /// Drops the client-supplied id.
    pub fn into_new_flight(self) -> NewFlight {
        NewFlight {
            from: self.from,
            to: self.to,
            date: self.date,
        }
    }
}

impl From<Flight> for FlightPayload {
    fn from(flight: Flight) -> Self {
        Self {
            id: Some(flight.id),
            from: flight.from,
            to: flight.to,
            date: flight.date,
        }
    }
}

/// Query parameters for `GET /flights`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FlightListQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl FlightListQuery {
    /// Picks `from` and `to` out of decoded query pairs.
    ///
    /// Never fails: unknown keys are skipped and a repeated key keeps its
    /// first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "from" => &mut query.from,
                "to" => &mut query.to,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl From<FlightListQuery> for FlightFilter {
    fn from(query: FlightListQuery) -> Self {
        FlightFilter::new(query.from, query.to)
    }
}
