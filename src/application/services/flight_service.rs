//! Flight listing and mutation service.

use std::sync::Arc;

use crate::domain::entities::{Flight, NewFlight};
use crate::domain::flight_query::{self, FlightFilter};
use crate::domain::repositories::FlightRepository;
use crate::error::AppError;

/// Service implementing the flight operations exposed by the API.
///
/// Stateless apart from the repository it delegates to. Works with any
/// [`FlightRepository`], including trait objects.
pub struct FlightService<R: FlightRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: FlightRepository + ?Sized> FlightService<R> {
    /// Creates a new flight service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists flights matching `filter`, in insertion order.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn list_flights(&self, filter: &FlightFilter) -> Result<Vec<Flight>, AppError> {
        let all = self.repository.list_all().await?;
        let total = all.len();
        let flights = flight_query::filter(all, filter);

        tracing::debug!(
            total,
            matched = flights.len(),
            from = ?filter.from,
            to = ?filter.to,
            "Listed flights"
        );

        Ok(flights)
    }

    /// Retrieves a single flight by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no flight has this id.
    pub async fn get_flight(&self, id: i64) -> Result<Flight, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Flight {id} does not exist.")))
    }

    /// Stores a new flight under a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn create_flight(&self, new_flight: NewFlight) -> Result<Flight, AppError> {
        let flight = self.repository.insert(new_flight).await?;
        tracing::info!(flight_id = flight.id, from = %flight.from, to = %flight.to, "Flight created");
        Ok(flight)
    }

    /// Replaces the flight stored under `id`.
    ///
    /// The stored record keeps `id` regardless of what the caller sent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no flight has this id. The store is
    /// left unchanged in that case.
    pub async fn replace_flight(&self, id: i64, flight: NewFlight) -> Result<Flight, AppError> {
        let flight = self.repository.replace(id, flight).await?;
        tracing::info!(flight_id = id, "Flight replaced");
        Ok(flight)
    }

    /// Deletes the flight stored under `id`.
    ///
    /// Returns whether a flight was actually removed. Deleting an unknown id
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn delete_flight(&self, id: i64) -> Result<bool, AppError> {
        let removed = self.repository.delete_by_id(id).await?;
        if removed {
            tracing::info!(flight_id = id, "Flight deleted");
        } else {
            tracing::debug!(flight_id = id, "Delete of unknown flight ignored");
        }
        Ok(removed)
    }

    /// Counts stored flights.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn count_flights(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
