//! Application layer - use cases that coordinate the external collaborators.
//!
//! This layer contains the decisions (what to sync, how to classify a
//! package, what to print for a record) and leaves printing and prompting to
//! the CLI layer.

mod check;
mod query;
mod remove;
mod sync;
mod upgrade;

use crate::aur::RemotePackages;
use crate::tools::{BuildTool, PackageManager, Vcs};

pub use check::{CheckAction, CheckRow, Status, format_table};
pub use query::{detail_lines, search_lines};
pub use remove::{RemoveAction, RemoveOutcome, Uninstall};
pub use sync::{SyncAction, SyncOutcome, SyncReport};
pub use upgrade::{UpgradeCheck, check_upgrade};

/// The external systems a command talks to.
#[derive(Clone, Copy)]
pub struct Backends<'a> {
    pub remote: &'a dyn RemotePackages,
    pub packages: &'a dyn PackageManager,
    pub vcs: &'a dyn Vcs,
    pub builder: &'a dyn BuildTool,
}
