//! Client-side flight state driven by user actions.
//!
//! [`FlightClient`] turns actions (open, list, save, remove) into API calls
//! and folds the outcome into local state: the cached list, the flight being
//! edited and a [`Feedback`] indicator. Load and save failures are reported
//! through that indicator instead of being propagated.

use crate::api::dto::flight::FlightPayload;
use crate::client::api_client::FlightApiClient;
use crate::client::error::ClientError;
use crate::domain::flight_query::FlightFilter;

/// Route id that opens an unsaved draft instead of a stored flight.
pub const NEW_FLIGHT_ID: &str = "new";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Warning,
}

/// User-facing outcome of the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Warning,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

pub struct FlightClient {
    api: FlightApiClient,
    flight_list: Vec<FlightPayload>,
    flight: Option<FlightPayload>,
    feedback: Option<Feedback>,
}

impl FlightClient {
    pub fn new(api: FlightApiClient) -> Self {
        Self {
            api,
            flight_list: Vec::new(),
            flight: None,
            feedback: None,
        }
    }

    /// Cached result of the last successful [`load_list`](Self::load_list).
    pub fn flights(&self) -> &[FlightPayload] {
        &self.flight_list
    }

    /// The flight currently opened for editing.
    pub fn flight(&self) -> Option<&FlightPayload> {
        self.flight.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn api(&self) -> &FlightApiClient {
        &self.api
    }

    /// Opens a flight for editing.
    ///
    /// `"new"` yields an empty draft without touching the API; any other id is
    /// looked up on the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the id is not numeric or the server
    /// has no such flight, or the transport error otherwise. A warning is
    /// recorded in either case.
    pub async fn fetch_by_id(&mut self, id: &str) -> Result<FlightPayload, ClientError> {
        let result = if id == NEW_FLIGHT_ID {
            Ok(FlightPayload::default())
        } else {
            match id.trim().parse::<i64>() {
                Ok(id) => self.api.find_by_id(id).await,
                Err(_) => Err(ClientError::NotFound(format!("'{id}' is not a flight id"))),
            }
        };

        match result {
            Ok(flight) => {
                self.flight = Some(flight.clone());
                self.feedback = None;
                Ok(flight)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Error loading flight");
                self.feedback = Some(Feedback::warning("Error loading"));
                Err(e)
            }
        }
    }

    /// Refreshes the cached list with flights matching `filter`.
    ///
    /// On failure the previous list is kept and a warning is recorded.
    /// Returns whether the cache was refreshed.
    pub async fn load_list(&mut self, filter: &FlightFilter) -> bool {
        match self.api.find(filter).await {
            Ok(flights) => {
                tracing::debug!(count = flights.len(), "Flight list loaded");
                self.flight_list = flights;
                self.feedback = None;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading");
                self.feedback = Some(Feedback::warning("Error loading"));
                false
            }
        }
    }

    /// Stores `flight`: replaces it when it has an id, creates it otherwise.
    ///
    /// On success the server's copy becomes the current flight. On failure
    /// the unsaved `flight` stays current so it can be saved again.
    pub async fn save(&mut self, flight: FlightPayload) -> &Feedback {
        let result = match flight.id {
            Some(id) => self.api.replace(id, &flight).await,
            None => self.api.create(&flight).await,
        };

        let feedback = match result {
            Ok(saved) => {
                self.flight = Some(saved);
                Feedback::success("Save was successful!")
            }
            Err(e) => {
                tracing::warn!(id = ?flight.id, error = %e, "Error saving flight");
                self.flight = Some(flight);
                Feedback::warning("Error saving")
            }
        };

        self.feedback.insert(feedback)
    }

    /// Deletes `flight` on the server and drops it from the cached list.
    ///
    /// A flight without an id was never stored, so this resolves immediately
    /// with `Ok(false)` and no API call.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error; a warning is recorded too.
    pub async fn remove(&mut self, flight: &FlightPayload) -> Result<bool, ClientError> {
        let Some(id) = flight.id else {
            return Ok(false);
        };

        match self.api.delete(id).await {
            Ok(()) => {
                self.flight_list.retain(|f| f.id != Some(id));
                if self.flight.as_ref().is_some_and(|f| f.id == Some(id)) {
                    self.flight = None;
                }
                self.feedback = Some(Feedback::success("Delete was successful!"));
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Error deleting flight");
                self.feedback = Some(Feedback::warning("Error deleting"));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> FlightClient {
        // Port 9 (discard) on loopback; requests fail fast with a connect error.
        FlightClient::new(FlightApiClient::new("http://127.0.0.1:9").unwrap())
    }

    #[tokio::test]
    async fn test_fetch_new_builds_draft_locally() {
        let mut client = offline_client();

        let draft = client.fetch_by_id(NEW_FLIGHT_ID).await.unwrap();

        assert_eq!(draft.id, None);
        assert!(draft.from.is_empty());
        assert_eq!(client.flight(), Some(&draft));
        assert!(client.feedback().is_none());
    }

    #[tokio::test]
    async fn test_fetch_non_numeric_id_is_not_found() {
        let mut client = offline_client();

        let err = client.fetch_by_id("abc").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(client.feedback(), Some(&Feedback::warning("Error loading")));
    }

    #[tokio::test]
    async fn test_remove_unsaved_flight_is_noop() {
        let mut client = offline_client();

        let removed = client.remove(&FlightPayload::default()).await.unwrap();

        assert!(!removed);
        assert!(client.feedback().is_none());
    }

    #[tokio::test]
    async fn test_load_list_failure_keeps_cache() {
        let mut client = offline_client();

        assert!(!client.load_list(&FlightFilter::default()).await);
        assert!(client.flights().is_empty());
        assert_eq!(client.feedback(), Some(&Feedback::warning("Error loading")));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_unsaved_flight() {
        let mut client = offline_client();
        let draft = FlightPayload {
            from: "VIE".to_string(),
            to: "LHR".to_string(),
            ..FlightPayload::default()
        };

        let feedback = client.save(draft.clone()).await.clone();

        assert_eq!(feedback, Feedback::warning("Error saving"));
        assert_eq!(client.flight(), Some(&draft));
    }
}
