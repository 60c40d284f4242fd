//! Check action - compares installed, remote and tracked state per package.

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;
use log::warn;

use crate::aur::RemotePackages;
use crate::runtime::Runtime;
use crate::store::Store;
use crate::tools::PackageManager;

/// Consistency status of a tracked package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Installed version equals the remote version
    UpToDate,
    /// Installed, but the remote no longer has it
    NotAvailable,
    /// Available remotely, not installed
    NotInstalled,
    /// A different remote version is available
    Update(String),
    /// Neither installed nor available remotely
    Absent,
}

impl Status {
    pub fn classify(installed: Option<&str>, remote: Option<&str>) -> Self {
        match (installed, remote) {
            (Some(local), Some(remote)) if local == remote => Status::UpToDate,
            (Some(_), Some(remote)) => Status::Update(remote.to_string()),
            (Some(_), None) => Status::NotAvailable,
            (None, Some(_)) => Status::NotInstalled,
            (None, None) => Status::Absent,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Status::UpToDate => "up-to-date",
            Status::NotAvailable => "not-available",
            Status::NotInstalled => "not-installed",
            Status::Update(version) => version,
            Status::Absent => "-",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the check report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRow {
    pub name: String,
    pub installed: Option<String>,
    pub remote: Option<String>,
    pub status: Status,
}

impl CheckRow {
    pub fn new(name: impl Into<String>, installed: Option<String>, remote: Option<String>) -> Self {
        let status = Status::classify(installed.as_deref(), remote.as_deref());
        Self {
            name: name.into(),
            installed,
            remote,
            status,
        }
    }

    fn cells(&self) -> [&str; 3] {
        [
            self.name.as_str(),
            self.installed.as_deref().unwrap_or("-"),
            self.status.label(),
        ]
    }
}

/// Render rows as aligned columns: name, installed version, status.
pub fn format_table(rows: &[CheckRow]) -> Vec<String> {
    let mut widths = [0usize; 2];
    for row in rows {
        let cells = row.cells();
        widths[0] = widths[0].max(cells[0].len());
        widths[1] = widths[1].max(cells[1].len());
    }

    rows.iter()
        .map(|row| {
            let [name, installed, status] = row.cells();
            format!(
                "{:<w0$} {:<w1$} {}",
                name,
                installed,
                status,
                w0 = widths[0],
                w1 = widths[1]
            )
        })
        .collect()
}

/// Check action - builds the consistency report for all tracked packages
pub struct CheckAction<'a, R: Runtime> {
    store: &'a Store<'a, R>,
    remote: &'a dyn RemotePackages,
    packages: &'a dyn PackageManager,
}

impl<'a, R: Runtime> CheckAction<'a, R> {
    pub fn new(
        store: &'a Store<'a, R>,
        remote: &'a dyn RemotePackages,
        packages: &'a dyn PackageManager,
    ) -> Self {
        Self {
            store,
            remote,
            packages,
        }
    }

    /// One row per tracked package, sorted by status label then name.
    pub async fn rows(&self) -> Result<Vec<CheckRow>> {
        let names = self.store.packages()?;

        let remote_versions: HashMap<String, String> = match self.remote.info(&names).await {
            Ok(records) => records.into_iter().map(|r| (r.name, r.version)).collect(),
            Err(e) => {
                warn!("Remote lookup failed, treating all packages as unavailable: {:#}", e);
                HashMap::new()
            }
        };

        let mut rows = Vec::with_capacity(names.len());
        for name in names {
            let installed = self.packages.installed_version(&name)?;
            let remote = remote_versions.get(&name).cloned();
            rows.push(CheckRow::new(name, installed, remote));
        }

        rows.sort_by(|a, b| {
            a.status
                .label()
                .cmp(b.status.label())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(rows)
    }
}
