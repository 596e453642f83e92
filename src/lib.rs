//! # Flight Service
//!
//! A small flight management service exposing a REST-style CRUD API over an
//! in-memory store, plus a typed client for consuming it.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Flight entity, filtering rules and the store trait
//! - **Application Layer** ([`application`]) - Flight operations built on the store
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and demo seed
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Client** ([`client`]) - HTTP proxy and client-side state
//!
//! ## Endpoints
//!
//! | Method | Path            | Success | Failure             |
//! |--------|-----------------|---------|---------------------|
//! | GET    | `/flights`      | 200     | -                   |
//! | POST   | `/flights`      | 201     | 400 malformed body  |
//! | GET    | `/flights/{id}` | 200     | 400 bad id, 404     |
//! | PUT    | `/flights/{id}` | 200     | 400, 404            |
//! | DELETE | `/flights/{id}` | 204     | - (idempotent)      |
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service on port 3000 with the demo flights
//! cargo run
//!
//! # Query it
//! cargo run --bin flights -- list --from graz
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::flight::FlightPayload;
    pub use crate::application::services::FlightService;
    pub use crate::client::{ClientError, FlightApiClient, FlightClient};
    pub use crate::domain::entities::{Flight, FlightDate, NewFlight};
    pub use crate::domain::flight_query::FlightFilter;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryFlightRepository;
    pub use crate::state::AppState;
}
