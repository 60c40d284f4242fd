//! AUR RPC (v5) implementation of [`RemotePackages`].

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use reqwest::Client;

use crate::http::HttpClient;

use super::{RemotePackages, RemoteRecord};

/// Default base URL of the package API and of the recipe repositories.
pub const DEFAULT_API_URL: &str = "https://aur.archlinux.org";

/// RPC response envelope (internal).
mod api {
    use serde::Deserialize;

    use crate::aur::RemoteRecord;

    #[derive(Deserialize, Debug)]
    pub struct Response {
        #[serde(rename = "type")]
        pub kind: String,
        #[serde(default)]
        pub error: Option<String>,
        #[serde(default)]
        pub results: Vec<RemoteRecord>,
    }
}

/// Client for the `/rpc/` endpoint.
pub struct AurRpc {
    http_client: HttpClient,
    api_url: String,
}

impl AurRpc {
    /// Create a client with the default API URL.
    #[cfg(test)]
    pub fn new(client: Client) -> Self {
        Self::from_http_client(HttpClient::new(client), DEFAULT_API_URL)
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    #[cfg(test)]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn query(&self, query: &[(&str, &str)]) -> Result<Vec<RemoteRecord>> {
        let url = format!("{}/rpc/", self.api_url);
        let response: api::Response = self.http_client.get_json_with_query(&url, query).await?;

        if response.kind == "error" {
            anyhow::bail!(
                "Package API error: {}",
                response.error.as_deref().unwrap_or("unknown error")
            );
        }

        debug!("{} result(s) from {}", response.results.len(), url);
        Ok(response.results)
    }
}

#[async_trait]
impl RemotePackages for AurRpc {
    #[tracing::instrument(skip(self))]
    async fn search(&self, term: &str) -> Result<Vec<RemoteRecord>> {
        debug!("Searching for {:?}...", term);
        self.query(&[("v", "5"), ("type", "search"), ("arg", term)])
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn info(&self, names: &[String]) -> Result<Vec<RemoteRecord>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Fetching info for {} package(s)...", names.len());
        let mut query: Vec<(&str, &str)> = vec![("v", "5"), ("type", "info")];
        query.extend(names.iter().map(|name| ("arg[]", name.as_str())));
        self.query(&query).await
    }

    fn clone_url(&self, record: &RemoteRecord) -> String {
        format!("{}/{}.git", self.api_url, record.base())
    }
}
