//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::FlightService;
use crate::domain::repositories::FlightRepository;

/// Flight service over whichever store the server was started with.
pub type SharedFlightService = Arc<FlightService<dyn FlightRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub flight_service: SharedFlightService,
}

impl AppState {
    pub fn new(repository: Arc<dyn FlightRepository>) -> Self {
        Self {
            flight_service: Arc::new(FlightService::new(repository)),
        }
    }
}
