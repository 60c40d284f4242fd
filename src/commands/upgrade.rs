use anyhow::Result;
use log::{debug, info, warn};
use std::collections::HashMap;

use crate::application::{Backends, SyncAction, UpgradeCheck, check_upgrade};
use crate::runtime::Runtime;
use crate::store::Store;

use super::config::Config;
use super::refresh::print_sync_outcome;
use super::services::Services;

/// Sync packages and rebuild the ones whose installed version is behind
#[tracing::instrument(skip(runtime, config))]
pub async fn upgrade<R: Runtime>(runtime: &R, config: &Config, names: Vec<String>) -> Result<()> {
    let services = Services::from_config(runtime, config)?;
    let tally = run_upgrade(runtime, config, services.backends(), names).await?;

    if tally.failures > 0 {
        anyhow::bail!(
            "{} of {} package(s) failed to upgrade",
            tally.failures,
            tally.total
        );
    }
    Ok(())
}

/// Counts of what happened during an upgrade run.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct UpgradeTally {
    pub total: usize,
    pub built: usize,
    pub skipped: usize,
    pub failures: usize,
}

pub(crate) async fn run_upgrade<R: Runtime>(
    runtime: &R,
    config: &Config,
    backends: Backends<'_>,
    names: Vec<String>,
) -> Result<UpgradeTally> {
    let store = Store::new(runtime, &config.root);
    store.ensure()?;
    let targets = store.resolve_targets(names)?;

    // One batched lookup for every target. Without it no version can be
    // compared, so nothing is rebuilt.
    let remote_versions: Option<HashMap<String, String>> =
        match backends.remote.info(&targets).await {
            Ok(records) => Some(records.into_iter().map(|r| (r.name, r.version)).collect()),
            Err(e) => {
                warn!("Remote lookup failed, no package will be rebuilt: {:#}", e);
                None
            }
        };

    let action = SyncAction::new(&store, backends.remote, backends.vcs);
    let mut tally = UpgradeTally {
        total: targets.len(),
        ..Default::default()
    };

    for name in &targets {
        let outcome = action.sync(name).await;
        print_sync_outcome(name, &outcome);
        if !outcome.is_success() {
            tally.failures += 1;
            continue;
        }

        let Some(remote_versions) = &remote_versions else {
            eprintln!("error: {}: remote version unknown, not rebuilding", name);
            tally.failures += 1;
            continue;
        };

        let installed = match backends.packages.installed_version(name) {
            Ok(version) => version,
            Err(e) => {
                eprintln!("error: {}: {:#}", name, e);
                tally.failures += 1;
                continue;
            }
        };

        let check = check_upgrade(installed, remote_versions.get(name).cloned());
        let Some(prompt) = check.prompt(name) else {
            debug!("{} is up to date", name);
            continue;
        };
        if let UpgradeCheck::Available { installed, remote } = &check {
            debug!("{}: {:?} -> {:?}", name, installed, remote);
        }

        if !(config.yes || runtime.confirm(&prompt)?) {
            println!(":: {} skipped", name);
            tally.skipped += 1;
            continue;
        }

        info!("Building {}", name);
        match backends.builder.build_and_install(&store.repo_dir(name)) {
            Ok(()) => tally.built += 1,
            Err(e) => {
                eprintln!("error: {}: build failed: {:#}", name, e);
                tally.failures += 1;
            }
        }
    }
    Ok(tally)
}
