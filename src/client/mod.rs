//! Consumer-side access to the flight API.
//!
//! - [`FlightApiClient`] - Typed `reqwest` proxy, one method per endpoint
//! - [`FlightClient`] - Local list/editor state updated from API results
//! - [`ClientError`] - Not found, rejected request, server and network failures

mod api_client;
mod error;
mod flight_client;

pub use api_client::FlightApiClient;
pub use error::ClientError;
pub use flight_client::{Feedback, FeedbackKind, FlightClient, NEW_FLIGHT_ID};
