use anyhow::Result;
use log::{debug, warn};

use crate::application::search_lines;
use crate::aur::RemotePackages;
use crate::runtime::Runtime;

use super::config::Config;
use super::services::Services;

/// Search the package API and print matches, most popular first
#[tracing::instrument(skip(runtime, config))]
pub async fn search<R: Runtime>(runtime: &R, config: &Config, terms: &[String]) -> Result<()> {
    let services = Services::from_config(runtime, config)?;
    for line in run_search(&services.remote, terms).await {
        println!("{}", line);
    }
    Ok(())
}

/// The API is queried with the first term; every term must match.
/// A failed query yields no lines.
pub(crate) async fn run_search(remote: &dyn RemotePackages, terms: &[String]) -> Vec<String> {
    let Some(first) = terms.first() else {
        return Vec::new();
    };

    let records = match remote.search(first).await {
        Ok(records) => records,
        Err(e) => {
            warn!("Search for {:?} failed: {:#}", first, e);
            return Vec::new();
        }
    };
    debug!("{} raw result(s) for {:?}", records.len(), first);

    search_lines(records, terms)
}
