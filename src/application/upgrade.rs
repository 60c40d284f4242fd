//! Upgrade decision for a synced package.

/// Result of comparing installed and remote versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeCheck {
    UpToDate,
    /// Installed differs from remote, including the not-installed case
    Available {
        installed: Option<String>,
        remote: Option<String>,
    },
}

/// A package needs building when it is not installed or its installed version
/// differs from the remote one.
pub fn check_upgrade(installed: Option<String>, remote: Option<String>) -> UpgradeCheck {
    match (&installed, &remote) {
        (Some(a), Some(b)) if a == b => UpgradeCheck::UpToDate,
        _ => UpgradeCheck::Available { installed, remote },
    }
}

impl UpgradeCheck {
    /// Confirmation prompt shown before building.
    pub fn prompt(&self, name: &str) -> Option<String> {
        match self {
            UpgradeCheck::UpToDate => None,
            UpgradeCheck::Available { installed, remote } => Some(format!(
                "Upgrade {} {} -> {}?",
                name,
                installed.as_deref().unwrap_or("(not installed)"),
                remote.as_deref().unwrap_or("(no remote version)")
            )),
        }
    }
}
