//! Remote package API abstraction.
//!
//! The helper only ever asks the API two things: a free-text search and a
//! batched lookup by exact name. Both return [`RemoteRecord`]s.

mod rpc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

pub use rpc::{AurRpc, DEFAULT_API_URL};

/// Package metadata as reported by the remote API.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteRecord {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub package_base: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "URL")]
    pub url: Option<String>,
    #[serde(default)]
    pub num_votes: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default, rename = "License", deserialize_with = "null_as_empty")]
    pub licenses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub depends: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub make_depends: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub opt_depends: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RemoteRecord {
    /// Name of the repository holding this package's build recipe.
    pub fn base(&self) -> &str {
        self.package_base.as_deref().unwrap_or(&self.name)
    }
}

/// Trait for the package-metadata web API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemotePackages: Send + Sync {
    /// Free-text search by name and description.
    async fn search(&self, term: &str) -> Result<Vec<RemoteRecord>>;

    /// Batched lookup by exact package name. Unknown names are simply absent.
    async fn info(&self, names: &[String]) -> Result<Vec<RemoteRecord>>;

    /// Git URL of the recipe repository for a record.
    fn clone_url(&self, record: &RemoteRecord) -> String;
}
