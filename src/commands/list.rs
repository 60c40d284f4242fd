use anyhow::Result;
use log::{debug, warn};

use crate::runtime::Runtime;
use crate::store::Store;
use crate::tools::Vcs;

use super::config::Config;
use super::services::Services;

/// List tracked packages
#[tracing::instrument(skip(runtime, config))]
pub fn list<R: Runtime>(runtime: &R, config: &Config, urls: bool) -> Result<()> {
    let services = Services::from_config(runtime, config)?;
    for line in run_list(runtime, config, &services.git, urls)? {
        println!("{}", line);
    }
    Ok(())
}

pub(crate) fn run_list<R: Runtime>(
    runtime: &R,
    config: &Config,
    vcs: &dyn Vcs,
    urls: bool,
) -> Result<Vec<String>> {
    let store = Store::new(runtime, &config.root);
    let names = store.packages()?;
    debug!("Found {} tracked package(s)", names.len());

    if !urls {
        return Ok(names);
    }

    Ok(names
        .into_iter()
        .map(|name| match vcs.remote_url(&store.repo_dir(&name)) {
            Ok(url) => format!("{} {}", name, url),
            Err(e) => {
                warn!("{}: {:#}", name, e);
                format!("{} -", name)
            }
        })
        .collect())
}
