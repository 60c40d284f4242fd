use anyhow::Result;
use log::info;

use crate::application::{Backends, SyncAction};
use crate::runtime::Runtime;
use crate::store::Store;

use super::config::Config;
use super::refresh::print_sync_outcome;
use super::services::Services;

/// Fetch the recipes of the named packages, then build and install them
#[tracing::instrument(skip(runtime, config))]
pub async fn install<R: Runtime>(runtime: &R, config: &Config, names: Vec<String>) -> Result<()> {
    let services = Services::from_config(runtime, config)?;
    let total = names.len();
    let failures = run_install(runtime, config, services.backends(), names).await?;

    if failures > 0 {
        anyhow::bail!("{} of {} package(s) failed to install", failures, total);
    }
    Ok(())
}

/// Returns the number of packages that failed to sync or build.
pub(crate) async fn run_install<R: Runtime>(
    runtime: &R,
    config: &Config,
    backends: Backends<'_>,
    names: Vec<String>,
) -> Result<usize> {
    let store = Store::new(runtime, &config.root);
    let action = SyncAction::new(&store, backends.remote, backends.vcs);

    let mut failures = 0;
    for name in &names {
        let outcome = action.sync(name).await;
        print_sync_outcome(name, &outcome);
        if !outcome.is_success() {
            failures += 1;
            continue;
        }

        info!("Building {}", name);
        if let Err(e) = backends.builder.build_and_install(&store.repo_dir(name)) {
            eprintln!("error: {}: build failed: {:#}", name, e);
            failures += 1;
        }
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aur::{MockRemotePackages, RemoteRecord};
    use crate::runtime::MockRuntime;
    use crate::test_utils::test_root;
    use crate::tools::{MockBuildTool, MockPackageManager, MockVcs};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_install_builds_after_clone() {
        let mut runtime = MockRuntime::new();

        // --- Setup ---

        // foo is not tracked yet, the store exists
        runtime.expect_is_dir().returning(|_| false);
        runtime.expect_exists().returning(|_| true);

        let mut remote = MockRemotePackages::new();
        remote.expect_info().returning(|_| {
            Ok(vec![RemoteRecord {
                name: "foo".into(),
                version: "1.0-1".into(),
                ..Default::default()
            }])
        });
        remote
            .expect_clone_url()
            .returning(|r| format!("http://aur.test/{}.git", r.name));

        let mut vcs = MockVcs::new();
        vcs.expect_clone_repo()
            .with(eq("http://aur.test/foo.git"), eq(test_root().join("foo")))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut builder = MockBuildTool::new();
        builder
            .expect_build_and_install()
            .with(eq(test_root().join("foo")))
            .times(1)
            .returning(|_| Ok(()));

        let packages = MockPackageManager::new();
        let backends = Backends {
            remote: &remote,
            packages: &packages,
            vcs: &vcs,
            builder: &builder,
        };

        // --- Execute ---

        let failures = run_install(
            &runtime,
            &Config::for_test(test_root()),
            backends,
            vec!["foo".into()],
        )
        .await
        .unwrap();

        // --- Verify ---

        assert_eq!(failures, 0);
    }

    #[tokio::test]
    async fn test_install_skips_build_when_sync_fails() {
        let mut runtime = MockRuntime::new();

        // --- Setup ---

        // foo is tracked but its pull fails; bar is tracked and pulls fine
        runtime.expect_is_dir().returning(|_| true);

        let remote = MockRemotePackages::new();
        let mut vcs = MockVcs::new();
        vcs.expect_pull().returning(|dir| {
            if dir.ends_with("foo") {
                Err(anyhow::anyhow!("diverged"))
            } else {
                Ok(())
            }
        });

        let mut builder = MockBuildTool::new();
        builder
            .expect_build_and_install()
            .with(eq(test_root().join("bar")))
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("missing dependency")));

        let packages = MockPackageManager::new();
        let backends = Backends {
            remote: &remote,
            packages: &packages,
            vcs: &vcs,
            builder: &builder,
        };

        // --- Execute ---

        let failures = run_install(
            &runtime,
            &Config::for_test(test_root()),
            backends,
            vec!["foo".into(), "bar".into()],
        )
        .await
        .unwrap();

        // --- Verify ---

        // One failed pull, one failed build
        assert_eq!(failures, 2);
    }
}
