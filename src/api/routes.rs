//! API route configuration.

use crate::api::handlers::{
    create_flight_handler, delete_flight_handler, get_flight_handler, list_flights_handler,
    replace_flight_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Flight resource routes.
///
/// # Endpoints
///
/// - `GET    /flights`        - List flights, filtered by `from` / `to`
/// - `POST   /flights`        - Create a flight
/// - `GET    /flights/{id}`   - Fetch a single flight
/// - `PUT    /flights/{id}`   - Replace a flight
/// - `DELETE /flights/{id}`   - Delete a flight (idempotent)
pub fn flight_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/flights",
            get(list_flights_handler).post(create_flight_handler),
        )
        .route(
            "/flights/{id}",
            get(get_flight_handler)
                .put(replace_flight_handler)
                .delete(delete_flight_handler),
        )
}
