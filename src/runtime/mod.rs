//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - User directories and privilege information
//! - `fs` - File system operations (directories of the repository store)
//! - `process` - External program execution (pacman, git, makepkg)
//! - `user` - User interaction (confirmation prompts)

mod env;
mod fs;
mod process;
mod user;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use process::{ProcessCommand, ProcessOutput};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    // Directories
    fn home_dir(&self) -> Option<PathBuf>;
    fn cache_dir(&self) -> Option<PathBuf>;

    // Privilege
    fn is_privileged(&self) -> bool;

    // Processes
    /// Run a program with inherited stdio. Returns Ok(true) when it exited
    /// successfully, Ok(false) on a non-zero exit, Err if it could not start.
    fn run(&self, command: &ProcessCommand) -> Result<bool>;

    /// Run a program and capture its stdout. Stderr is inherited.
    fn output(&self, command: &ProcessCommand) -> Result<ProcessOutput>;

    // User interaction
    /// Prompt user for confirmation. Blank input counts as yes.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove_dir_all_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.read_dir_impl(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_impl()
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir_impl()
    }

    fn is_privileged(&self) -> bool {
        self.is_privileged_impl()
    }

    fn run(&self, command: &ProcessCommand) -> Result<bool> {
        self.run_impl(command)
    }

    fn output(&self, command: &ProcessCommand) -> Result<ProcessOutput> {
        self.output_impl(command)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.confirm_impl(prompt)
    }
}
