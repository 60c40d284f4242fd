//! pacman wrapper.

use anyhow::Result;
use log::debug;

use crate::runtime::{ProcessCommand, Runtime};

use super::{PackageManager, ensure_success};

pub struct Pacman<'a, R: Runtime> {
    runtime: &'a R,
    noconfirm: bool,
}

impl<'a, R: Runtime> Pacman<'a, R> {
    /// `noconfirm` passes `--noconfirm` to removals.
    pub fn new(runtime: &'a R, noconfirm: bool) -> Self {
        Self { runtime, noconfirm }
    }

    fn remove_command(&self, name: &str) -> ProcessCommand {
        let command = if self.runtime.is_privileged() {
            ProcessCommand::new("pacman")
        } else {
            ProcessCommand::new("sudo").arg("pacman")
        };
        let command = command.arg("-Rs");
        let command = if self.noconfirm {
            command.arg("--noconfirm")
        } else {
            command
        };
        command.arg(name)
    }
}

/// Parse `pacman -Q` output ("name version").
fn parse_query_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
}

impl<R: Runtime> PackageManager for Pacman<'_, R> {
    #[tracing::instrument(skip(self))]
    fn installed_version(&self, name: &str) -> Result<Option<String>> {
        let output = self
            .runtime
            .output(&ProcessCommand::new("pacman").args(["-Q", name]))?;

        if !output.success {
            debug!("{} is not installed", name);
            return Ok(None);
        }

        Ok(parse_query_output(&output.stdout))
    }

    #[tracing::instrument(skip(self))]
    fn remove(&self, name: &str) -> Result<()> {
        let command = self.remove_command(name);
        let success = self.runtime.run(&command)?;
        ensure_success(success, &command.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, ProcessOutput};

    #[test]
    fn test_parse_query_output() {
        assert_eq!(parse_query_output("foo 1.0-1\n"), Some("1.0-1".to_string()));
        assert_eq!(parse_query_output("foo\n"), None);
        assert_eq!(parse_query_output(""), None);
    }

    #[test]
    fn test_installed_version_present() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_output()
            .withf(|cmd| cmd.program == "pacman" && cmd.args == ["-Q", "foo"])
            .returning(|_| {
                Ok(ProcessOutput {
                    success: true,
                    stdout: "foo 1.0-1\n".into(),
                })
            });

        let pacman = Pacman::new(&runtime, false);
        assert_eq!(
            pacman.installed_version("foo").unwrap(),
            Some("1.0-1".to_string())
        );
    }

    #[test]
    fn test_installed_version_absent() {
        let mut runtime = MockRuntime::new();
        runtime.expect_output().returning(|_| {
            Ok(ProcessOutput {
                success: false,
                stdout: String::new(),
            })
        });

        let pacman = Pacman::new(&runtime, false);
        assert_eq!(pacman.installed_version("bar").unwrap(), None);
    }

    #[test]
    fn test_remove_uses_sudo_when_unprivileged() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_privileged().returning(|| false);
        runtime
            .expect_run()
            .withf(|cmd| cmd.program == "sudo" && cmd.args == ["pacman", "-Rs", "foo"])
            .times(1)
            .returning(|_| Ok(true));

        Pacman::new(&runtime, false).remove("foo").unwrap();
    }

    #[test]
    fn test_remove_as_root_with_noconfirm() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_privileged().returning(|| true);
        runtime
            .expect_run()
            .withf(|cmd| cmd.program == "pacman" && cmd.args == ["-Rs", "--noconfirm", "foo"])
            .times(1)
            .returning(|_| Ok(true));

        Pacman::new(&runtime, true).remove("foo").unwrap();
    }

    #[test]
    fn test_remove_failure_is_error() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_privileged().returning(|| true);
        runtime.expect_run().returning(|_| Ok(false));

        let err = Pacman::new(&runtime, false).remove("foo").unwrap_err();
        assert!(err.to_string().contains("pacman -Rs foo"));
    }
}
