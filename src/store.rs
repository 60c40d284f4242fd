//! Repository store: one recipe checkout per tracked package.

use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// The directory holding the local recipe repositories.
///
/// Layout: `<root>/<package-name>/` is a git working copy.
pub struct Store<'a, R: Runtime> {
    runtime: &'a R,
    root: PathBuf,
}

impl<'a, R: Runtime> Store<'a, R> {
    pub fn new(runtime: &'a R, root: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            root: root.into(),
        }
    }

    /// Create the store directory if it does not exist yet.
    pub fn ensure(&self) -> Result<()> {
        if !self.runtime.exists(&self.root) {
            debug!("Creating store {}", self.root.display());
            self.runtime
                .create_dir_all(&self.root)
                .with_context(|| format!("Failed to create store {}", self.root.display()))?;
        }
        Ok(())
    }

    /// Directory of a package's local repository, whether or not it exists.
    pub fn repo_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Whether a local repository exists for the package.
    pub fn contains(&self, name: &str) -> bool {
        self.runtime.is_dir(&self.repo_dir(name))
    }

    /// Names of all tracked packages, sorted.
    pub fn packages(&self) -> Result<Vec<String>> {
        self.ensure()?;

        let mut names: Vec<String> = self
            .runtime
            .read_dir(&self.root)?
            .into_iter()
            .filter(|path| self.runtime.is_dir(path))
            .filter_map(|path| path.file_name()?.to_str().map(String::from))
            .collect();
        names.sort();
        Ok(names)
    }

    /// The given names, or every tracked package when none were given.
    pub fn resolve_targets(&self, names: Vec<String>) -> Result<Vec<String>> {
        if names.is_empty() {
            self.packages()
        } else {
            Ok(names)
        }
    }

    /// Delete a package's local repository.
    ///
    /// Returns Ok(false) when there was nothing to delete. Names that could
    /// address the store root or escape it are refused.
    pub fn remove(&self, name: &str) -> Result<bool> {
        if !is_plain_name(name) {
            anyhow::bail!("Refusing to delete repository for invalid name {:?}", name);
        }

        let dir = self.repo_dir(name);
        if !self.runtime.exists(&dir) {
            return Ok(false);
        }

        debug!("Removing repository {}", dir.display());
        self.runtime.remove_dir_all(&dir)?;
        Ok(true)
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
