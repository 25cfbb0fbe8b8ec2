//! HTTP client for the Pawsome API.
//!
//! [`DogSource`] is the seam the catalog loads through; [`ApiClient`] is
//! the production implementation built on [`reqwest`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::model::Dog;

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connection refused, DNS, body decode, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Somewhere the catalog can fetch dog lists from.
#[async_trait]
pub trait DogSource: Send + Sync {
    /// Every dog, newest first.
    async fn list_dogs(&self) -> Result<Vec<Dog>, ClientError>;

    /// Featured dogs, newest first.
    async fn list_featured_dogs(&self) -> Result<Vec<Dog>, ClientError>;
}

/// `{ "data": T }` envelope used by every API response.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// HTTP client for a Pawsome API server.
///
/// No request timeout is configured: a hung call keeps the caller waiting.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url`, e.g. `http://localhost:2022`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// GET a path under `/api/v1` and unwrap the data envelope.
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/v1{path}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<DataEnvelope<T>>().await?.data)
    }
}

#[async_trait]
impl DogSource for ApiClient {
    async fn list_dogs(&self) -> Result<Vec<Dog>, ClientError> {
        self.get_data("/dogs").await
    }

    async fn list_featured_dogs(&self) -> Result<Vec<Dog>, ClientError> {
        self.get_data("/dogs/featured").await
    }
}
