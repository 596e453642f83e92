//! Domain layer containing business entities and logic.
//!
//! Defines the flight entity, the pure filtering rules applied on listing, and
//! the store contract implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`flight_query`] - Origin/destination filtering over a snapshot of records
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod flight_query;
pub mod repositories;
