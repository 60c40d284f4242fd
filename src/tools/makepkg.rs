//! makepkg wrapper.

use anyhow::Result;
use std::path::Path;

use crate::runtime::{ProcessCommand, Runtime};

use super::{BuildTool, ensure_success};

/// Resolve dependencies, verify sources, build, and install only if needed,
/// without any prompt.
const MAKEPKG_ARGS: [&str; 4] = ["--syncdeps", "--install", "--needed", "--noconfirm"];

pub struct Makepkg<'a, R: Runtime> {
    runtime: &'a R,
}

impl<'a, R: Runtime> Makepkg<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self { runtime }
    }
}

impl<R: Runtime> BuildTool for Makepkg<'_, R> {
    #[tracing::instrument(skip(self))]
    fn build_and_install(&self, repo_dir: &Path) -> Result<()> {
        let command = ProcessCommand::new("makepkg")
            .args(MAKEPKG_ARGS)
            .current_dir(repo_dir);
        let success = self.runtime.run(&command)?;
        ensure_success(success, &command.to_string())
    }
}
