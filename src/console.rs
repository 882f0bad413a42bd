//! Console front end
//!
//! A thin adapter between an operator-facing command (CLI, task runner, ...)
//! and the dump/load pipelines. It resolves the artifact path and driver,
//! refuses to clobber or to load missing files, asks for confirmation, and
//! reports every outcome as plain text through a [`Console`].

use log::error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::driver::DriverRegistry;
use crate::error::{Error, Result};
use crate::manager::SchemaManager;
use crate::process::ProcessRunner;
use crate::schema::LoadOutcome;

const MSG_FINISHED: &str = "Finished.";
const MSG_UNSUPPORTED: &str = "That database driver is not supported.";
const MSG_FILE_EXISTS: &str = "The specified file already exists, exiting.";
const MSG_FILE_MISSING: &str = "The specified file does not exist.";
const MSG_DUMP_FAILED: &str = "Failed to dump the database schema.";
const MSG_LOAD_FAILED: &str = "Failed to load the database schema.";
const MSG_LOAD_DECLINED: &str = "Not loading the specified schema dump file.";
const MSG_INVALID_ACTION: &str = "Valid arguments are \"dump\" and \"load\".";

/// Where operator-facing text goes and where confirmations come from
pub trait Console {
    /// Print an informational line
    fn info(&self, message: &str);

    /// Ask a yes/no question
    fn confirm(&self, question: &str) -> bool;
}

/// What the operator asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaAction {
    Dump,
    Load,
}

impl FromStr for SchemaAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dump" => Ok(SchemaAction::Dump),
            "load" => Ok(SchemaAction::Load),
            _ => Err(Error::Config(MSG_INVALID_ACTION.into())),
        }
    }
}

impl fmt::Display for SchemaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SchemaAction::Dump => "dump",
            SchemaAction::Load => "load",
        })
    }
}

/// Per-invocation overrides (both fall back to the manager's configuration)
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Artifact filename relative to the schema directory
    pub filename: Option<String>,
    /// Driver name
    pub driver: Option<String>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }
}

/// How an invocation ended, for choosing an exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// The operation completed
    Finished,
    /// The operator declined to continue
    Declined,
    /// Preconditions failed (bad driver, file exists or is missing, bad action)
    Rejected,
    /// The operation started and failed
    Failed,
}

impl CommandStatus {
    /// Conventional process exit code
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            CommandStatus::Finished | CommandStatus::Declined => 0,
            CommandStatus::Rejected => 2,
            CommandStatus::Failed => 1,
        }
    }
}

/// Operator-facing `dump` / `load` commands
pub struct SchemaCommand<'a, R: ProcessRunner> {
    manager: &'a SchemaManager<R>,
}

impl<'a, R: ProcessRunner> SchemaCommand<'a, R> {
    pub fn new(manager: &'a SchemaManager<R>) -> Self {
        Self { manager }
    }

    /// Parse an action name and run it; unknown names are rejected with guidance
    pub fn run_named(
        &self,
        action: &str,
        console: &dyn Console,
        options: &CommandOptions,
    ) -> CommandStatus {
        match action.parse::<SchemaAction>() {
            Ok(action) => self.run(action, console, options),
            Err(_) => {
                console.info(MSG_INVALID_ACTION);
                CommandStatus::Rejected
            }
        }
    }

    /// Run an action
    pub fn run(
        &self,
        action: SchemaAction,
        console: &dyn Console,
        options: &CommandOptions,
    ) -> CommandStatus {
        match action {
            SchemaAction::Dump => self.dump(console, options),
            SchemaAction::Load => self.load(console, options),
        }
    }

    /// Dump the schema to a file that must not exist yet
    pub fn dump(&self, console: &dyn Console, options: &CommandOptions) -> CommandStatus {
        let Some(driver) = self.checked_driver(console, options) else {
            return CommandStatus::Rejected;
        };

        let path = self.artifact_path(options);
        if path.exists() {
            console.info(MSG_FILE_EXISTS);
            return CommandStatus::Rejected;
        }

        match self.manager.dump(&driver, &path) {
            Ok(_) => {
                console.info(MSG_FINISHED);
                CommandStatus::Finished
            }
            Err(e) => {
                error!("Schema dump to {} failed: {e}", path.display());
                console.info(MSG_DUMP_FAILED);
                CommandStatus::Failed
            }
        }
    }

    /// Load an existing schema file after confirmation
    pub fn load(&self, console: &dyn Console, options: &CommandOptions) -> CommandStatus {
        let Some(driver) = self.checked_driver(console, options) else {
            return CommandStatus::Rejected;
        };

        let path = self.artifact_path(options);
        if !path.exists() {
            console.info(MSG_FILE_MISSING);
            return CommandStatus::Rejected;
        }

        let confirm = |question: &str| console.confirm(question);
        match self.manager.load(&driver, &path, &confirm) {
            Ok(LoadOutcome::Restored { .. }) => {
                console.info(MSG_FINISHED);
                CommandStatus::Finished
            }
            Ok(LoadOutcome::Declined) => {
                console.info(MSG_LOAD_DECLINED);
                CommandStatus::Declined
            }
            Err(e) => {
                error!("Schema load from {} failed: {e}", path.display());
                console.info(MSG_LOAD_FAILED);
                CommandStatus::Failed
            }
        }
    }

    /// Lowercased driver name, or `None` after telling the operator what is supported
    fn checked_driver(&self, console: &dyn Console, options: &CommandOptions) -> Option<String> {
        let requested = options
            .driver
            .as_deref()
            .unwrap_or(&self.manager.config().driver);
        let driver = DriverRegistry::normalize(requested);

        if self.manager.registry().is_supported(&driver) {
            Some(driver)
        } else {
            console.info(MSG_UNSUPPORTED);
            console.info(&format!(
                "Supported drivers: {}",
                self.manager.registry().supported().join(", ")
            ));
            None
        }
    }

    fn artifact_path(&self, options: &CommandOptions) -> PathBuf {
        match &options.filename {
            Some(filename) => self.manager.config().artifact_path_for(filename),
            None => self.manager.config().artifact_path(),
        }
    }
}
