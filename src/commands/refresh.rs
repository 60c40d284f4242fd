use anyhow::Result;

use crate::application::{Backends, SyncAction, SyncOutcome, SyncReport};
use crate::runtime::Runtime;
use crate::store::Store;

use super::config::Config;
use super::services::Services;

/// Clone or pull the named packages, or every tracked package
#[tracing::instrument(skip(runtime, config))]
pub async fn refresh<R: Runtime>(runtime: &R, config: &Config, names: Vec<String>) -> Result<()> {
    let services = Services::from_config(runtime, config)?;
    let report = run_refresh(runtime, config, services.backends(), names).await?;

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} package(s) failed to refresh",
            report.failures(),
            report.outcomes.len()
        );
    }
    Ok(())
}

pub(crate) async fn run_refresh<R: Runtime>(
    runtime: &R,
    config: &Config,
    backends: Backends<'_>,
    names: Vec<String>,
) -> Result<SyncReport> {
    let store = Store::new(runtime, &config.root);
    store.ensure()?;
    let targets = store.resolve_targets(names)?;

    let action = SyncAction::new(&store, backends.remote, backends.vcs);
    let mut report = SyncReport::default();
    for name in &targets {
        let outcome = action.sync(name).await;
        print_sync_outcome(name, &outcome);
        report.push(name, outcome);
    }
    Ok(report)
}

/// Successes go to stdout, failures to stderr.
pub(crate) fn print_sync_outcome(name: &str, outcome: &SyncOutcome) {
    if outcome.is_success() {
        println!(":: {} {}", name, outcome);
    } else {
        eprintln!("error: {}: {}", name, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aur::MockRemotePackages;
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_root;
    use crate::tools::{MockBuildTool, MockPackageManager, MockVcs};

    #[tokio::test]
    async fn test_refresh_defaults_to_tracked_packages() {
        let mut runtime = MockRuntime::new();

        // --- Setup ---

        // Store holds foo and bar, both tracked
        runtime.expect_exists().returning(|_| true);
        runtime.expect_read_dir().returning(|_| {
            Ok(vec![test_root().join("foo"), test_root().join("bar")])
        });
        runtime.expect_is_dir().returning(|_| true);

        let remote = MockRemotePackages::new();
        let packages = MockPackageManager::new();
        let builder = MockBuildTool::new();
        let mut vcs = MockVcs::new();
        vcs.expect_pull().times(2).returning(|dir| {
            if dir.ends_with("bar") {
                Err(anyhow::anyhow!("conflict"))
            } else {
                Ok(())
            }
        });

        let backends = Backends {
            remote: &remote,
            packages: &packages,
            vcs: &vcs,
            builder: &builder,
        };

        // --- Execute ---

        let report = run_refresh(&runtime, &Config::for_test(test_root()), backends, vec![])
            .await
            .unwrap();

        // --- Verify ---

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(
            report.outcomes,
            vec![
                ("bar".to_string(), SyncOutcome::PullFailed("conflict".into())),
                ("foo".to_string(), SyncOutcome::Pulled),
            ]
        );
        assert!(!report.is_success());
    }

    #[tokio::test]
    async fn test_refresh_unknown_package_fails() {
        let mut runtime = MockRuntime::new();

        // --- Setup ---

        runtime.expect_exists().returning(|_| true);
        runtime.expect_is_dir().returning(|_| false);

        let mut remote = MockRemotePackages::new();
        remote.expect_info().returning(|_| Ok(vec![]));
        let packages = MockPackageManager::new();
        let builder = MockBuildTool::new();
        let mut vcs = MockVcs::new();
        vcs.expect_clone_repo().never();

        let backends = Backends {
            remote: &remote,
            packages: &packages,
            vcs: &vcs,
            builder: &builder,
        };

        // --- Execute ---

        let report = run_refresh(
            &runtime,
            &Config::for_test(test_root()),
            backends,
            vec!["nope".into()],
        )
        .await
        .unwrap();

        // --- Verify ---

        assert_eq!(
            report.outcomes,
            vec![("nope".to_string(), SyncOutcome::NotFound)]
        );
        assert!(!report.is_success());
    }
}
