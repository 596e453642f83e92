//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod flights;
pub mod health;

pub use flights::{
    create_flight_handler, delete_flight_handler, get_flight_handler, list_flights_handler,
    replace_flight_handler,
};
pub use health::health_handler;
