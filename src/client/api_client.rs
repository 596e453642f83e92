//! Typed proxy for the flight REST API.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::dto::flight::FlightPayload;
use crate::client::error::ClientError;
use crate::domain::flight_query::FlightFilter;
use crate::error::ErrorBody;

/// A thin wrapper around `reqwest::Client` bound to the API base URL.
///
/// Every method maps one endpoint; status codes are translated into
/// [`ClientError`] variants and nothing is retried. Requests carry no
/// timeout: a slow call resolves with whatever the server eventually answers.
#[derive(Debug, Clone)]
pub struct FlightApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl FlightApiClient {
    /// Constructs a client for the API rooted at `base_url`
    /// (e.g. `"http://localhost:3000"`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/flights", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/flights/{}", self.base_url, id)
    }

    /// `GET /flights/{id}`
    pub async fn find_by_id(&self, id: i64) -> Result<FlightPayload, ClientError> {
        let response = self.client.get(self.item_url(id)).send().await?;
        read_json(response).await
    }

    /// `GET /flights?from=..&to=..`
    pub async fn find(&self, filter: &FlightFilter) -> Result<Vec<FlightPayload>, ClientError> {
        let mut params = Vec::new();
        if let Some(from) = &filter.from {
            params.push(("from", from.as_str()));
        }
        if let Some(to) = &filter.to {
            params.push(("to", to.as_str()));
        }

        let response = self
            .client
            .get(self.collection_url())
            .query(&params)
            .send()
            .await?;
        read_json(response).await
    }

    /// `POST /flights`
    pub async fn create(&self, flight: &FlightPayload) -> Result<FlightPayload, ClientError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(flight)
            .send()
            .await?;
        read_json(response).await
    }

    /// `PUT /flights/{id}`
    pub async fn replace(
        &self,
        id: i64,
        flight: &FlightPayload,
    ) -> Result<FlightPayload, ClientError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(flight)
            .send()
            .await?;
        read_json(response).await
    }

    /// `DELETE /flights/{id}`
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        check_status(response).await.map(|_| ())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::NOT_FOUND {
        let body = error_body(response).await;
        Err(ClientError::NotFound(body.message))
    } else if status.is_client_error() {
        Err(ClientError::BadRequest(error_body(response).await))
    } else if status.is_server_error() {
        Err(ClientError::Server(status))
    } else {
        Err(ClientError::UnexpectedStatus(status))
    }
}

/// Reads the `{message, exception}` body, tolerating responses without one.
async fn error_body(response: Response) -> ErrorBody {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body,
        Err(_) => ErrorBody {
            message: status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
            exception: None,
        },
    }
}
