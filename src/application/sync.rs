//! Sync action - clones missing recipe repositories and pulls existing ones.

use std::fmt;

use log::{debug, warn};

use crate::aur::RemotePackages;
use crate::runtime::Runtime;
use crate::store::Store;
use crate::tools::Vcs;

/// What happened to one package during a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Existing repository pulled
    Pulled,
    /// Repository cloned from the remote
    Cloned,
    PullFailed(String),
    CloneFailed(String),
    /// No local repository and no remote record
    NotFound,
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Pulled | SyncOutcome::Cloned)
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::Pulled => write!(f, "pulled"),
            SyncOutcome::Cloned => write!(f, "cloned"),
            SyncOutcome::PullFailed(e) => write!(f, "pull failed: {}", e),
            SyncOutcome::CloneFailed(e) => write!(f, "clone failed: {}", e),
            SyncOutcome::NotFound => write!(f, "no remote repository"),
        }
    }
}

/// Per-package outcomes of a sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<(String, SyncOutcome)>,
}

impl SyncReport {
    pub fn push(&mut self, name: &str, outcome: SyncOutcome) {
        self.outcomes.push((name.to_string(), outcome));
    }

    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_success())
            .count()
    }

    /// True only when no package failed.
    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

/// Sync action - brings one package's local repository up to date
pub struct SyncAction<'a, R: Runtime> {
    store: &'a Store<'a, R>,
    remote: &'a dyn RemotePackages,
    vcs: &'a dyn Vcs,
}

impl<'a, R: Runtime> SyncAction<'a, R> {
    pub fn new(store: &'a Store<'a, R>, remote: &'a dyn RemotePackages, vcs: &'a dyn Vcs) -> Self {
        Self { store, remote, vcs }
    }

    /// Pull the package's repository if it is tracked, clone it otherwise.
    ///
    /// Once a local repository exists the remote API is not consulted.
    pub async fn sync(&self, name: &str) -> SyncOutcome {
        let dir = self.store.repo_dir(name);

        if self.store.contains(name) {
            debug!("Pulling {}", dir.display());
            return match self.vcs.pull(&dir) {
                Ok(()) => SyncOutcome::Pulled,
                Err(e) => SyncOutcome::PullFailed(format!("{:#}", e)),
            };
        }

        let records = match self.remote.info(&[name.to_string()]).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Lookup of {} failed: {:#}", name, e);
                Vec::new()
            }
        };
        let Some(record) = records.into_iter().find(|r| r.name == name) else {
            return SyncOutcome::NotFound;
        };

        if let Err(e) = self.store.ensure() {
            return SyncOutcome::CloneFailed(format!("{:#}", e));
        }

        let url = self.remote.clone_url(&record);
        debug!("Cloning {} into {}", url, dir.display());
        match self.vcs.clone_repo(&url, &dir) {
            Ok(()) => SyncOutcome::Cloned,
            Err(e) => SyncOutcome::CloneFailed(format!("{:#}", e)),
        }
    }
}
