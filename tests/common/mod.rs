#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use flight_service::domain::entities::{Flight, FlightDate, NewFlight};
use flight_service::infrastructure::persistence::InMemoryFlightRepository;
use flight_service::routes::app_router;
use flight_service::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

/// Midnight UTC on the given day, rendered as `YYYY-MM-DDT00:00:00Z`.
pub fn date(year: i32, month: u32, day: u32) -> FlightDate {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap().into()
}

pub fn test_flight(id: i64, from: &str, to: &str) -> Flight {
    NewFlight::new(from, to, date(2024, 1, 1)).with_id(id)
}

/// State over an in-memory store holding `flights`.
pub fn create_test_state(flights: Vec<Flight>) -> (AppState, Arc<InMemoryFlightRepository>) {
    let repo = Arc::new(InMemoryFlightRepository::with_flights(flights));
    let state = AppState::new(repo.clone());
    (state, repo)
}

/// Serves the full router on an ephemeral loopback port and returns its base URL.
pub async fn spawn_server(flights: Vec<Flight>) -> String {
    use axum::ServiceExt;
    use axum::extract::Request;

    let (state, _repo) = create_test_state(flights);
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .await
            .unwrap();
    });

    format!("http://{addr}")
}
