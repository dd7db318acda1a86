//! HTTP client with upstream status classification.

use anyhow::Result;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::{UpstreamError, classify_status};

/// HTTP client for the upstream API. No retries: one request per call.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Non-2xx statuses are reported as [`UpstreamError`] before the body
    /// is read, so an error object from the API never reaches the decoder.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(UpstreamError::from_transport)?;

        if let Some(err) = classify_status(response.status(), response.headers()) {
            debug!("GET {} returned {}", url, response.status());
            return Err(err.into());
        }

        let result = response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                UpstreamError::Decode(e)
            } else {
                UpstreamError::from_transport(e)
            }
        })?;

        Ok(result)
    }
}
