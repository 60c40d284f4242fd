use anyhow::Result;
use log::{debug, warn};

use crate::application::{RemoveAction, RemoveOutcome, Uninstall};
use crate::runtime::Runtime;
use crate::store::Store;
use crate::tools::PackageManager;

use super::config::Config;
use super::services::Services;

/// Uninstall packages and delete their local repositories
#[tracing::instrument(skip(runtime, config))]
pub fn remove<R: Runtime>(runtime: &R, config: &Config, names: &[String]) -> Result<()> {
    let services = Services::from_config(runtime, config)?;
    for line in run_remove(runtime, config, &services.pacman, names) {
        println!("{}", line);
    }
    Ok(())
}

/// Failures are logged and do not stop the remaining packages.
pub(crate) fn run_remove<R: Runtime>(
    runtime: &R,
    config: &Config,
    packages: &dyn PackageManager,
    names: &[String],
) -> Vec<String> {
    let store = Store::new(runtime, &config.root);
    let action = RemoveAction::new(&store, packages);

    let mut lines = Vec::new();
    for name in names {
        let outcome = action.remove(name);
        debug!("{}: {:?}", name, outcome);
        lines.extend(describe(name, &outcome));
    }
    lines
}

fn describe(name: &str, outcome: &RemoveOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    match &outcome.uninstall {
        Uninstall::Removed => lines.push(format!(":: {} uninstalled", name)),
        Uninstall::NotInstalled => debug!("{} is not installed", name),
        Uninstall::Failed(e) => warn!("{}: uninstall failed: {}", name, e),
    }
    match &outcome.repo_deleted {
        Ok(true) => lines.push(format!(":: {} repository deleted", name)),
        Ok(false) => debug!("{} has no local repository", name),
        Err(e) => warn!("{}: {}", name, e),
    }
    lines
}
