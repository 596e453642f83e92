//! Business logic services for the application layer.

pub mod flight_service;

pub use flight_service::FlightService;
