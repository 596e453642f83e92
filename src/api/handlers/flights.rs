//! Handlers for flight resource endpoints (list, lookup, create, replace, delete).

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::api::dto::flight::{FlightListQuery, FlightPayload};
use crate::domain::flight_query::FlightFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists flights, optionally filtered by origin and destination.
///
/// # Endpoint
///
/// `GET /flights?from=VIE&to=LHR`
///
/// Both parameters are optional and matched case-insensitively after
/// trimming. An empty parameter is ignored, and a repeated one keeps its
/// first value, so the query string never causes a rejection.
pub async fn list_flights_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<FlightPayload>>, AppError> {
    let filter: FlightFilter = FlightListQuery::from_pairs(pairs).into();
    let flights = state.flight_service.list_flights(&filter).await?;

    Ok(Json(flights.into_iter().map(FlightPayload::from).collect()))
}

/// Returns a single flight.
///
/// # Endpoint
///
/// `GET /flights/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not an integer.
/// Returns 404 Not Found if no flight has this id.
pub async fn get_flight_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<FlightPayload>, AppError> {
    let Path(id) = path?;
    let flight = state.flight_service.get_flight(id).await?;
    Ok(Json(flight.into()))
}

/// Creates a new flight.
///
/// # Endpoint
///
/// `POST /flights`
///
/// # Request Body
///
/// ```json
/// { "from": "VIE", "to": "LHR", "date": "2024-01-01T00:00:00Z" }
/// ```
///
/// Any `id` in the body is ignored; the store assigns one.
///
/// # Errors
///
/// Returns 400 Bad Request with `{message, exception}` if the body is not a
/// valid flight. No record is created in that case.
pub async fn create_flight_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<FlightPayload>), AppError> {
    let payload = FlightPayload::parse(&body)?;

    let flight = state
        .flight_service
        .create_flight(payload.into_new_flight())
        .await?;

    Ok((StatusCode::CREATED, Json(flight.into())))
}

/// Replaces an existing flight.
///
/// # Endpoint
///
/// `PUT /flights/{id}`
///
/// The path id always wins over an `id` in the body.
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not an integer or the body is not a
/// valid flight.
/// Returns 404 Not Found if no flight has this id.
pub async fn replace_flight_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FlightPayload>, AppError> {
    let Path(id) = path?;
    let payload = FlightPayload::parse(&body)?;

    if payload.id.is_some_and(|body_id| body_id != id) {
        tracing::debug!(flight_id = id, body_id = ?payload.id, "Body id overridden by path id");
    }

    let flight = state
        .flight_service
        .replace_flight(id, payload.into_new_flight())
        .await?;

    Ok(Json(flight.into()))
}

/// Deletes a flight.
///
/// # Endpoint
///
/// `DELETE /flights/{id}`
///
/// # Behavior
///
/// Always answers 204 No Content, whether or not the flight existed, so
/// repeating the call is harmless. An id that is not an integer cannot name
/// a stored flight and is answered the same way.
pub async fn delete_flight_handler(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Delete of unparsable id ignored");
            return Ok(StatusCode::NO_CONTENT);
        }
    };

    state.flight_service.delete_flight(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
