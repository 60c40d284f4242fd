//! HTTP client for JSON API requests.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::classify_status;

/// Thin wrapper over a reqwest Client for the package API.
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
    #[cfg(test)]
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    /// Error statuses are turned into a `RequestError`.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .context("Failed to send request")?;

        if let Some(err) = classify_status(response.status()) {
            debug!("{} answered {}", url, response.status());
            return Err(err.into());
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")
    }
}
