//! Running external commands
//!
//! [`ProcessRunner`] is the seam between the pipeline and the operating
//! system. The default [`ShellRunner`] hands the rendered line to the platform
//! shell and blocks until it exits.

use log::debug;
use std::process::Command;

use crate::command::CommandLine;
use crate::error::{Error, Result};

/// Executes a command line to completion and returns its stdout
pub trait ProcessRunner {
    /// Run the command, blocking until it exits
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProcessFailed`] on a non-zero exit status, carrying the exit
    /// code and captured stderr.
    fn run(&self, command: &CommandLine) -> Result<String>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, command: &CommandLine) -> Result<String> {
        (**self).run(command)
    }
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for Box<R> {
    fn run(&self, command: &CommandLine) -> Result<String> {
        (**self).run(command)
    }
}

/// Runs command lines through the platform shell (`sh -c` / `cmd /C`)
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    flag: String,
}

impl Default for ShellRunner {
    fn default() -> Self {
        if cfg!(windows) {
            Self::with_shell("cmd", "/C")
        } else {
            Self::with_shell("sh", "-c")
        }
    }
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific shell, e.g. `("bash", "-c")`
    pub fn with_shell(shell: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            flag: flag.into(),
        }
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&self, command: &CommandLine) -> Result<String> {
        debug!("Running {}: {}", command.kind(), command);

        let output = Command::new(&self.shell)
            .arg(&self.flag)
            .arg(command.to_shell())
            .output()
            .map_err(|e| Error::ProcessSpawn {
                command: command.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::ProcessFailed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        if !output.stderr.is_empty() {
            debug!(
                "{} wrote to stderr: {}",
                command.kind(),
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        String::from_utf8(output.stdout).map_err(|e| Error::InvalidOutput {
            command: command.to_string(),
            source: e,
        })
    }
}
