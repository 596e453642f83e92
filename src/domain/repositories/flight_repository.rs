//! Repository trait for flight data access.

use crate::domain::entities::{Flight, NewFlight};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface owning the canonical list of flights.
///
/// All mutations are visible to subsequent [`list_all`](Self::list_all) calls
/// as soon as they return.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryFlightRepository`] - process-memory store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_flight.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Returns a snapshot of all flights in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn list_all(&self) -> Result<Vec<Flight>, AppError>;

    /// Computes the id the next inserted flight will receive.
    ///
    /// The id is the highest existing id plus one, or `1` for an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn next_id(&self) -> Result<i64, AppError>;

    /// Finds a flight by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Flight))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn find_by_id(&self, id: i64) -> Result<Option<Flight>, AppError>;

    /// Assigns the next id, appends the flight and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn insert(&self, new_flight: NewFlight) -> Result<Flight, AppError>;

    /// Overwrites the flight with matching id in place, keeping its position.
    ///
    /// The stored record always carries `id`, whatever the caller supplied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no flight has this id.
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn replace(&self, id: i64, flight: NewFlight) -> Result<Flight, AppError>;

    /// Removes the first flight with matching id.
    ///
    /// Returns `Ok(true)` if a flight was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored flights.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn count(&self) -> Result<usize, AppError>;
}
