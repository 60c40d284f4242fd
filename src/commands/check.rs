use anyhow::Result;

use crate::application::{CheckAction, format_table};
use crate::aur::RemotePackages;
use crate::runtime::Runtime;
use crate::store::Store;
use crate::tools::PackageManager;

use super::config::Config;
use super::services::Services;

/// Report installed versus remote versions for every tracked package
#[tracing::instrument(skip(runtime, config))]
pub async fn check<R: Runtime>(runtime: &R, config: &Config) -> Result<()> {
    let services = Services::from_config(runtime, config)?;
    for line in run_check(runtime, config, &services.remote, &services.pacman).await? {
        println!("{}", line);
    }
    Ok(())
}

pub(crate) async fn run_check<R: Runtime>(
    runtime: &R,
    config: &Config,
    remote: &dyn RemotePackages,
    packages: &dyn PackageManager,
) -> Result<Vec<String>> {
    let store = Store::new(runtime, &config.root);
    let rows = CheckAction::new(&store, remote, packages).rows().await?;
    Ok(format_table(&rows))
}
