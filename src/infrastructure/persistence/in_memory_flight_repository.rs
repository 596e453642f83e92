//! Process-memory implementation of [`FlightRepository`].

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Flight, NewFlight};
use crate::domain::repositories::FlightRepository;
use crate::error::AppError;

/// Id handed out when the store holds no flights.
pub const FIRST_FLIGHT_ID: i64 = 1;

/// Flight store backed by a `Vec` behind an async read-write lock.
///
/// Id assignment and the append happen under one write guard, so concurrent
/// inserts never observe the same next id. Concurrent replaces of the same id
/// are last-write-wins.
#[derive(Debug, Default)]
pub struct InMemoryFlightRepository {
    flights: RwLock<Vec<Flight>>,
}

impl InMemoryFlightRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `flights`, kept in the given order.
    pub fn with_flights(flights: Vec<Flight>) -> Self {
        debug!(count = flights.len(), "Seeding in-memory flight store");
        Self {
            flights: RwLock::new(flights),
        }
    }
}

fn next_id_in(flights: &[Flight]) -> i64 {
    flights
        .iter()
        .map(|f| f.id)
        .max()
        .map_or(FIRST_FLIGHT_ID, |max| max + 1)
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn list_all(&self) -> Result<Vec<Flight>, AppError> {
        Ok(self.flights.read().await.clone())
    }

    async fn next_id(&self) -> Result<i64, AppError> {
        Ok(next_id_in(&self.flights.read().await))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Flight>, AppError> {
        let flights = self.flights.read().await;
        Ok(flights.iter().find(|f| f.id == id).cloned())
    }

    async fn insert(&self, new_flight: NewFlight) -> Result<Flight, AppError> {
        let mut flights = self.flights.write().await;
        let flight = new_flight.with_id(next_id_in(&flights));
        flights.push(flight.clone());
        Ok(flight)
    }

    async fn replace(&self, id: i64, flight: NewFlight) -> Result<Flight, AppError> {
        let mut flights = self.flights.write().await;
        let slot = flights
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::not_found(format!("Flight {id} does not exist.")))?;

        *slot = flight.with_id(id);
        Ok(slot.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut flights = self.flights.write().await;
        match flights.iter().position(|f| f.id == id) {
            Some(index) => {
                flights.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.flights.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_flight(from: &str, to: &str) -> NewFlight {
        NewFlight::new(from, to, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_next_id_on_empty_store() {
        let repo = InMemoryFlightRepository::new();
        assert_eq!(repo.next_id().await.unwrap(), FIRST_FLIGHT_ID);
    }

    #[tokio::test]
    async fn test_next_id_is_max_plus_one() {
        let repo = InMemoryFlightRepository::with_flights(vec![
            new_flight("A", "B").with_id(7),
            new_flight("C", "D").with_id(3),
        ]);
        assert_eq!(repo.next_id().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let repo = InMemoryFlightRepository::new();
        repo.insert(new_flight("VIE", "LHR")).await.unwrap();
        repo.insert(new_flight("LHR", "JFK")).await.unwrap();
        repo.insert(new_flight("JFK", "VIE")).await.unwrap();

        let updated = repo.replace(2, new_flight("LHR", "SFO")).await.unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.to, "SFO");

        let all = repo.list_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[1].to, "SFO");
    }

    #[tokio::test]
    async fn test_replace_missing_is_not_found() {
        let repo = InMemoryFlightRepository::new();
        let result = repo.replace(99, new_flight("VIE", "LHR")).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_only_first_match() {
        let duplicate = new_flight("A", "B").with_id(5);
        let repo = InMemoryFlightRepository::with_flights(vec![duplicate.clone(), duplicate]);

        assert!(repo.delete_by_id(5).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let repo = InMemoryFlightRepository::new();
        repo.insert(new_flight("VIE", "LHR")).await.unwrap();

        let snapshot = repo.list_all().await.unwrap();
        repo.delete_by_id(1).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
