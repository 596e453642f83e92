//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Following the
//! "New Type" pattern, creation input lives in a separate struct:
//!
//! - [`Flight`] - A stored flight record with its assigned id
//! - [`NewFlight`] - Input for creating or replacing a flight
//! - [`FlightDate`] - Departure date, validated but kept as sent

pub mod flight;
pub mod flight_date;

pub use flight::{Flight, NewFlight};
pub use flight_date::{FlightDate, InvalidFlightDate};
