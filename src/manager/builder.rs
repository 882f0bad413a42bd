//! Builder for SchemaManager
//!
//! This module contains [`SchemaManagerBuilder`] which provides a fluent API
//! for creating a [`SchemaManager`](super::SchemaManager).

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{ConnectionParams, DumpConfig, DumpConfigBuilder, EnvSource};
use crate::error::Result;
use crate::process::{ProcessRunner, ShellRunner};

use super::SchemaManager;

/// Builder for creating a [`SchemaManager`] with a fluent API.
///
/// Connection parameters default to the `DB_*` process environment variables,
/// read once when [`build`](Self::build) is called.
///
/// # Example
///
/// ```rust,no_run
/// use schemadump::{ConnectionParams, SchemaManager};
///
/// let manager = SchemaManager::builder()
///     .schema_dir("~/projects/shop/database")
///     .filename("schema.sql")
///     .bookkeeping_table("migrations")
///     .connection(ConnectionParams::new("127.0.0.1", "3306", "root", "secret", "shop"))
///     .build()
///     .unwrap();
/// ```
pub struct SchemaManagerBuilder<R: ProcessRunner = ShellRunner> {
    config_builder: DumpConfigBuilder,
    connection: Option<ConnectionParams>,
    env_source: Option<Arc<dyn EnvSource>>,
    runner: R,
}

impl SchemaManagerBuilder<ShellRunner> {
    /// Create a new builder using the platform shell
    pub fn new() -> Self {
        Self {
            config_builder: DumpConfigBuilder::new(),
            connection: None,
            env_source: None,
            runner: ShellRunner::default(),
        }
    }
}

impl Default for SchemaManagerBuilder<ShellRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner> SchemaManagerBuilder<R> {
    /// Start from an existing configuration
    #[must_use]
    pub fn with_config(mut self, config: DumpConfig) -> Self {
        self.config_builder = config.into();
        self
    }

    /// Set the directory holding the artifact.
    ///
    /// Supports `~` expansion for home directory.
    #[must_use]
    pub fn schema_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_builder = self.config_builder.schema_dir(path);
        self
    }

    /// Set the artifact filename (default: "schema.sql").
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.filename(filename);
        self
    }

    /// Set the default driver name (default: "mysql").
    #[must_use]
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.driver(driver);
        self
    }

    /// Set the bookkeeping table (default: "migrations").
    #[must_use]
    pub fn bookkeeping_table(mut self, table: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.bookkeeping_table(table);
        self
    }

    /// Use a specific dump executable.
    #[must_use]
    pub fn dump_program(mut self, program: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.dump_program(program);
        self
    }

    /// Use a specific restore executable.
    #[must_use]
    pub fn restore_program(mut self, program: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.restore_program(program);
        self
    }

    /// Use explicit connection parameters instead of the environment.
    #[must_use]
    pub fn connection(mut self, connection: ConnectionParams) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Read the `DB_*` variables from a custom source instead of the process environment.
    #[must_use]
    pub fn env_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.env_source = Some(Arc::new(source));
        self
    }

    /// Run commands through a custom [`ProcessRunner`].
    pub fn runner<R2: ProcessRunner>(self, runner: R2) -> SchemaManagerBuilder<R2> {
        SchemaManagerBuilder {
            config_builder: self.config_builder,
            connection: self.connection,
            env_source: self.env_source,
            runner,
        }
    }

    /// Build the [`SchemaManager`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<SchemaManager<R>> {
        let connection = match (self.connection, self.env_source) {
            (Some(connection), _) => connection,
            (None, Some(source)) => ConnectionParams::from_env_source(source.as_ref()),
            (None, None) => ConnectionParams::from_env(),
        };

        SchemaManager::with_runner(self.config_builder.build(), connection, self.runner)
    }
}
