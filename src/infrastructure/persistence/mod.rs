//! Flight store implementations.
//!
//! - [`InMemoryFlightRepository`] - Process-memory store; state resets on restart
//! - [`seed::demo_flights`] - Fixed demo set loaded at startup

mod in_memory_flight_repository;
pub mod seed;

pub use in_memory_flight_repository::{FIRST_FLIGHT_ID, InMemoryFlightRepository};
