//! External collaborators driven as subprocesses.
//!
//! Each trait is the narrow interface the commands consume; the
//! implementations shell out through [`Runtime`](crate::runtime::Runtime).

mod git;
mod makepkg;
mod pacman;

use anyhow::Result;
use std::path::Path;

pub use git::Git;
pub use makepkg::Makepkg;
pub use pacman::Pacman;

/// The system package manager.
#[cfg_attr(test, mockall::automock)]
pub trait PackageManager: Send + Sync {
    /// Installed version of a package, or None when it is not installed.
    fn installed_version(&self, name: &str) -> Result<Option<String>>;

    /// Uninstall a package together with the dependencies it pulled in.
    fn remove(&self, name: &str) -> Result<()>;
}

/// The version-control client holding the recipe repositories.
#[cfg_attr(test, mockall::automock)]
pub trait Vcs: Send + Sync {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
    fn pull(&self, repo_dir: &Path) -> Result<()>;
    fn remote_url(&self, repo_dir: &Path) -> Result<String>;
}

/// The tool that builds a recipe and installs the result.
#[cfg_attr(test, mockall::automock)]
pub trait BuildTool: Send + Sync {
    fn build_and_install(&self, repo_dir: &Path) -> Result<()>;
}

/// Turn a failed exit status into an error naming the command.
fn ensure_success(success: bool, what: &str) -> Result<()> {
    if success {
        Ok(())
    } else {
        anyhow::bail!("`{}` exited with a failure status", what)
    }
}
