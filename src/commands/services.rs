//! Service factory for building command dependencies.
//!
//! This module separates the construction of the collaborators (package API
//! client, package manager, git, makepkg) from the configuration.

use anyhow::Result;
use reqwest::Client;

use crate::{
    application::Backends,
    aur::AurRpc,
    http::HttpClient,
    runtime::Runtime,
    tools::{Git, Makepkg, Pacman},
};

use super::config::Config;

/// User agent sent to the package API.
const USER_AGENT: &str = "aurh-cli";

/// Build the HTTP client used for API requests
pub fn build_http_client() -> Result<HttpClient> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(HttpClient::new(client))
}

/// Concrete collaborators built from configuration.
pub struct Services<'a, R: Runtime> {
    pub remote: AurRpc,
    pub pacman: Pacman<'a, R>,
    pub git: Git<'a, R>,
    pub makepkg: Makepkg<'a, R>,
}

impl<'a, R: Runtime> Services<'a, R> {
    pub fn from_config(runtime: &'a R, config: &Config) -> Result<Self> {
        Ok(Self {
            remote: AurRpc::from_http_client(build_http_client()?, &config.api_url),
            pacman: Pacman::new(runtime, config.yes),
            git: Git::new(runtime),
            makepkg: Makepkg::new(runtime),
        })
    }

    pub fn backends(&self) -> Backends<'_> {
        Backends {
            remote: &self.remote,
            packages: &self.pacman,
            vcs: &self.git,
            builder: &self.makepkg,
        }
    }
}
