// file: src/executor.rs
// version: 1.0.0
// guid: bcf90304-e36a-4c5f-a374-197887558519

//! Command execution for package and service management
//!
//! Steps talk to a [`CommandRunner`] so that the same pipeline can run
//! against the real system, in dry-run mode, or against a recording double
//! in tests.

use crate::error::SetupError;
use crate::Result;
use std::fmt;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, info};

/// A program invocation with arguments and extra environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCommand {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl SystemCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for SystemCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Trait for running system commands
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command to completion and return its stdout
    async fn run(&self, command: &SystemCommand) -> Result<String>;

    /// Check whether a program can be found on PATH
    fn command_exists(&self, program: &str) -> bool;
}

/// Runs commands on the local machine
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &SystemCommand) -> Result<String> {
        debug!("Executing local command: {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .envs(command.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| SetupError::ProcessError {
                command: command.to_string(),
                exit_code: None,
                stderr: format!("Failed to execute command: {}", e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let exit_code = output.status.code();
            error!("Command failed with exit code {:?}", exit_code);
            if !stdout.trim().is_empty() {
                error!("STDOUT: {}", stdout);
            }
            if !stderr.trim().is_empty() {
                error!("STDERR: {}", stderr);
            }

            return Err(SetupError::ProcessError {
                command: command.to_string(),
                exit_code,
                stderr: if stderr.trim().is_empty() {
                    stdout
                } else {
                    stderr.to_string()
                },
            });
        }

        debug!("Command executed successfully: {} bytes of output", stdout.len());
        Ok(stdout)
    }

    fn command_exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Logs commands instead of running them
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

#[async_trait::async_trait]
impl CommandRunner for DryRunRunner {
    async fn run(&self, command: &SystemCommand) -> Result<String> {
        info!("DRY RUN: Would execute: {}", command);
        Ok(String::new())
    }

    fn command_exists(&self, _program: &str) -> bool {
        true
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Records every command and fails the ones it is told to
    #[derive(Default)]
    pub struct RecordingRunner {
        pub commands: Mutex<Vec<SystemCommand>>,
        pub failing_args: HashSet<String>,
        pub missing_programs: HashSet<String>,
    }

    impl RecordingRunner {
        pub fn failing_on(arg: &str) -> Self {
            Self {
                failing_args: [arg.to_string()].into_iter().collect(),
                ..Default::default()
            }
        }

        pub fn without_program(program: &str) -> Self {
            Self {
                missing_programs: [program.to_string()].into_iter().collect(),
                ..Default::default()
            }
        }

        pub fn recorded(&self) -> Vec<String> {
            self.commands
                .lock()
                .unwrap()
                .iter()
                .map(ToString::to_string)
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &SystemCommand) -> Result<String> {
            self.commands.lock().unwrap().push(command.clone());
            if command
                .args
                .iter()
                .any(|a| self.failing_args.contains(a))
            {
                return Err(SetupError::ProcessError {
                    command: command.to_string(),
                    exit_code: Some(1),
                    stderr: "simulated failure".to_string(),
                });
            }
            Ok(String::new())
        }

        fn command_exists(&self, program: &str) -> bool {
            !self.missing_programs.contains(program)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_command_display() {
        let cmd = SystemCommand::new("update-rc.d")
            .args(["rpcbind", "enable"])
            .env("DEBIAN_FRONTEND", "noninteractive");

        assert_eq!(cmd.to_string(), "update-rc.d rpcbind enable");
        assert_eq!(cmd.envs.len(), 1);
    }

    #[tokio::test]
    async fn test_system_runner_success() {
        let runner = SystemRunner::new();
        let output = runner
            .run(&SystemCommand::new("echo").args(["hello"]))
            .await
            .unwrap();
        assert_eq!(output.trim(), "hello");
    }

    #[tokio::test]
    async fn test_system_runner_passes_env() {
        let runner = SystemRunner::new();
        let cmd = SystemCommand::new("sh")
            .args(["-c", "echo $SHARE_TEST_VALUE"])
            .env("SHARE_TEST_VALUE", "noninteractive");

        let output = runner.run(&cmd).await.unwrap();
        assert_eq!(output.trim(), "noninteractive");
    }

    #[tokio::test]
    async fn test_system_runner_nonzero_exit() {
        let runner = SystemRunner::new();
        let err = runner
            .run(&SystemCommand::new("sh").args(["-c", "echo broken >&2; exit 3"]))
            .await
            .unwrap_err();

        match err {
            SetupError::ProcessError {
                exit_code, stderr, ..
            } => {
                assert_eq!(exit_code, Some(3));
                assert!(stderr.contains("broken"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_system_runner_missing_program() {
        let runner = SystemRunner::new();
        let err = runner
            .run(&SystemCommand::new("nonexistent-command-12345"))
            .await
            .unwrap_err();

        assert!(matches!(err, SetupError::ProcessError { exit_code: None, .. }));
        assert!(!runner.command_exists("nonexistent-command-12345"));
    }

    #[tokio::test]
    async fn test_dry_run_runner_executes_nothing() {
        let runner = DryRunRunner;
        let output = runner
            .run(&SystemCommand::new("nonexistent-command-12345"))
            .await
            .unwrap();
        assert!(output.is_empty());
        assert!(runner.command_exists("apt"));
    }
}
