//! Remove action - uninstalls a package and deletes its local repository.

use log::debug;

use crate::runtime::Runtime;
use crate::store::Store;
use crate::tools::PackageManager;

/// What the package manager step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Uninstall {
    NotInstalled,
    Removed,
    Failed(String),
}

/// Result of removing one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub uninstall: Uninstall,
    /// Ok(true) if the local repository was deleted, Ok(false) if there was none
    pub repo_deleted: Result<bool, String>,
}

/// Remove action - handles removal of packages
pub struct RemoveAction<'a, R: Runtime> {
    store: &'a Store<'a, R>,
    packages: &'a dyn PackageManager,
}

impl<'a, R: Runtime> RemoveAction<'a, R> {
    pub fn new(store: &'a Store<'a, R>, packages: &'a dyn PackageManager) -> Self {
        Self { store, packages }
    }

    /// Uninstall the package if installed, then delete its repository.
    ///
    /// The repository is deleted even when uninstalling failed.
    pub fn remove(&self, name: &str) -> RemoveOutcome {
        debug!("Removing package {}", name);

        let uninstall = match self.packages.installed_version(name) {
            Ok(None) => Uninstall::NotInstalled,
            Ok(Some(version)) => {
                debug!("Uninstalling {} {}", name, version);
                match self.packages.remove(name) {
                    Ok(()) => Uninstall::Removed,
                    Err(e) => Uninstall::Failed(format!("{:#}", e)),
                }
            }
            Err(e) => Uninstall::Failed(format!("{:#}", e)),
        };

        let repo_deleted = self.store.remove(name).map_err(|e| format!("{:#}", e));

        RemoveOutcome {
            uninstall,
            repo_deleted,
        }
    }
}
