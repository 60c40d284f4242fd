//! git wrapper.

use anyhow::{Context, Result};
use std::path::Path;

use crate::runtime::{ProcessCommand, Runtime};

use super::{Vcs, ensure_success};

pub struct Git<'a, R: Runtime> {
    runtime: &'a R,
}

impl<'a, R: Runtime> Git<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }
}

impl<R: Runtime> Vcs for Git<'_, R> {
    #[tracing::instrument(skip(self))]
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let dest = dest.to_string_lossy();
        let command = ProcessCommand::new("git").args(["clone", url, &*dest]);
        let success = self.runtime.run(&command)?;
        ensure_success(success, &command.to_string())
    }

    #[tracing::instrument(skip(self))]
    fn pull(&self, repo_dir: &Path) -> Result<()> {
        let command = ProcessCommand::new("git")
            .args(["pull", "--ff-only"])
            .current_dir(repo_dir);
        let success = self.runtime.run(&command)?;
        ensure_success(success, &command.to_string())
    }

    #[tracing::instrument(skip(self))]
    fn remote_url(&self, repo_dir: &Path) -> Result<String> {
        let command = ProcessCommand::new("git")
            .args(["remote", "get-url", "origin"])
            .current_dir(repo_dir);
        let output = self.runtime.output(&command)?;
        ensure_success(output.success, &command.to_string())
            .with_context(|| format!("No origin remote in {}", repo_dir.display()))?;
        Ok(output.stdout.trim().to_string())
    }
}
