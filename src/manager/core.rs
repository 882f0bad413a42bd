//! Core SchemaManager struct and constructors

use std::path::Path;

use crate::command::CommandBuilder;
use crate::config::{ConnectionParams, DumpConfig};
use crate::driver::DriverRegistry;
use crate::error::Result;
use crate::process::{ProcessRunner, ShellRunner};
use crate::schema::{Confirm, DumpReport, LoadOutcome, SchemaDumper, SchemaRestorer};

use super::SchemaManagerBuilder;

/// Entry point tying together configuration, connection, driver registry and
/// process runner.
///
/// # Example
///
/// ```rust,no_run
/// use schemadump::SchemaManager;
///
/// # fn example() -> schemadump::Result<()> {
/// let manager = SchemaManager::builder()
///     .schema_dir("database")
///     .build()?;
///
/// let path = manager.config().artifact_path();
/// let report = manager.dumper().dump("mysql", &path)?;
/// println!("{} bookkeeping rows", report.bookkeeping_rows);
///
/// // Later, against an empty database
/// manager.restorer().load("mysql", &path, &true)?;
/// # Ok(())
/// # }
/// ```
pub struct SchemaManager<R: ProcessRunner = ShellRunner> {
    pub(crate) config: DumpConfig,
    pub(crate) connection: ConnectionParams,
    pub(crate) registry: DriverRegistry,
    pub(crate) runner: R,
}

impl SchemaManager<ShellRunner> {
    /// Create a new builder
    pub fn builder() -> SchemaManagerBuilder {
        SchemaManagerBuilder::new()
    }

    /// Create a manager that runs commands through the platform shell
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: DumpConfig, connection: ConnectionParams) -> Result<Self> {
        Self::with_runner(config, connection, ShellRunner::default())
    }
}

impl<R: ProcessRunner> SchemaManager<R> {
    /// Create a manager with a custom process runner
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_runner(config: DumpConfig, connection: ConnectionParams, runner: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            connection,
            registry: DriverRegistry::default(),
            runner,
        })
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    pub fn connection(&self) -> &ConnectionParams {
        &self.connection
    }

    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve a driver name and build commands for it
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDriver`](crate::Error::UnsupportedDriver) for
    /// unsupported names.
    pub fn command_builder(&self, driver: &str) -> Result<CommandBuilder> {
        let driver = self.registry.resolve(driver)?;
        Ok(CommandBuilder::new(driver, &self.config))
    }

    /// Access the dump pipeline
    pub fn dumper(&self) -> SchemaDumper<'_, R> {
        SchemaDumper::new(self)
    }

    /// Access the restore path
    pub fn restorer(&self) -> SchemaRestorer<'_, R> {
        SchemaRestorer::new(self)
    }

    /// Shorthand for `self.dumper().dump(driver, output)`
    ///
    /// # Errors
    ///
    /// See [`SchemaDumper::dump`].
    pub fn dump(&self, driver: &str, output: &Path) -> Result<DumpReport> {
        self.dumper().dump(driver, output)
    }

    /// Shorthand for `self.restorer().load(driver, input, confirm)`
    ///
    /// # Errors
    ///
    /// See [`SchemaRestorer::load`].
    pub fn load<C>(&self, driver: &str, input: &Path, confirm: &C) -> Result<LoadOutcome>
    where
        C: Confirm + ?Sized,
    {
        self.restorer().load(driver, input, confirm)
    }
}
