use anyhow::Result;
use log::warn;

use crate::application::detail_lines;
use crate::aur::RemotePackages;
use crate::runtime::Runtime;

use super::config::Config;
use super::services::Services;

/// Print remote details for the named packages
#[tracing::instrument(skip(runtime, config))]
pub async fn details<R: Runtime>(runtime: &R, config: &Config, names: &[String]) -> Result<()> {
    let services = Services::from_config(runtime, config)?;
    for line in run_details(&services.remote, names).await {
        println!("{}", line);
    }
    Ok(())
}

/// One block per found package, in request order, separated by blank lines.
pub(crate) async fn run_details(remote: &dyn RemotePackages, names: &[String]) -> Vec<String> {
    let records = match remote.info(names).await {
        Ok(records) => records,
        Err(e) => {
            warn!("Lookup failed: {:#}", e);
            return Vec::new();
        }
    };

    let mut lines = Vec::new();
    for name in names {
        let Some(record) = records.iter().find(|r| &r.name == name) else {
            warn!("{}: package not found", name);
            continue;
        };
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(detail_lines(record));
    }
    lines
}
