//! Dump configuration and its builder

use std::path::PathBuf;

use crate::driver::Driver;
use crate::error::{Error, Result};

/// Default directory holding the schema artifact
pub const DEFAULT_SCHEMA_DIR: &str = "database";

/// Default artifact filename
pub const DEFAULT_FILENAME: &str = "schema.sql";

/// Default name of the migration bookkeeping table
pub const DEFAULT_BOOKKEEPING_TABLE: &str = "migrations";

/// Configuration shared by the dump and restore paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Directory the artifact lives in (e.g. a project's `database/` folder)
    pub schema_dir: PathBuf,

    /// Artifact filename inside `schema_dir`
    pub filename: String,

    /// Driver name used when the caller doesn't pick one
    pub driver: String,

    /// Table whose rows are appended after the schema
    pub bookkeeping_table: String,

    /// Override for the dump executable (driver default when `None`)
    pub dump_program: Option<String>,

    /// Override for the restore executable (driver default when `None`)
    pub restore_program: Option<String>,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            schema_dir: PathBuf::from(DEFAULT_SCHEMA_DIR),
            filename: DEFAULT_FILENAME.into(),
            driver: Driver::default().name().into(),
            bookkeeping_table: DEFAULT_BOOKKEEPING_TABLE.into(),
            dump_program: None,
            restore_program: None,
        }
    }
}

impl DumpConfig {
    /// Create a new builder for DumpConfig
    ///
    /// # Example
    /// ```rust
    /// use schemadump::DumpConfig;
    ///
    /// let config = DumpConfig::builder()
    ///     .schema_dir("database")
    ///     .filename("schema.sql")
    ///     .bookkeeping_table("migrations")
    ///     .build();
    /// assert!(config.artifact_path().ends_with("database/schema.sql"));
    /// ```
    pub fn builder() -> DumpConfigBuilder {
        DumpConfigBuilder::new()
    }

    /// Full path of the default artifact
    pub fn artifact_path(&self) -> PathBuf {
        self.schema_dir.join(&self.filename)
    }

    /// Full path of an artifact with a caller-chosen filename
    pub fn artifact_path_for(&self, filename: &str) -> PathBuf {
        self.schema_dir.join(filename)
    }

    /// Dump executable for a driver, honouring the override
    pub fn dump_program_for(&self, driver: Driver) -> String {
        self.dump_program
            .clone()
            .unwrap_or_else(|| driver.dump_program().to_string())
    }

    /// Restore executable for a driver, honouring the override
    pub fn restore_program_for(&self, driver: Driver) -> String {
        self.restore_program
            .clone()
            .unwrap_or_else(|| driver.restore_program().to_string())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the filename or bookkeeping table is empty, or if
    /// the table name contains whitespace (it is spliced into a shell line unquoted).
    pub fn validate(&self) -> Result<()> {
        if self.filename.trim().is_empty() {
            return Err(Error::Config("Artifact filename must not be empty".into()));
        }
        if self.bookkeeping_table.is_empty() {
            return Err(Error::Config(
                "Bookkeeping table name must not be empty".into(),
            ));
        }
        if self.bookkeeping_table.chars().any(char::is_whitespace) {
            return Err(Error::Config(format!(
                "Bookkeeping table name '{}' must not contain whitespace",
                self.bookkeeping_table
            )));
        }
        Ok(())
    }
}

/// Builder for creating DumpConfig with a fluent API
#[derive(Debug, Clone, Default)]
pub struct DumpConfigBuilder {
    config: DumpConfig,
}

impl DumpConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory holding the artifact
    ///
    /// Supports `~` expansion for home directory.
    #[must_use]
    pub fn schema_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let expanded = if path.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                home.join(path.strip_prefix("~").unwrap_or(&path))
            } else {
                path
            }
        } else {
            path
        };
        self.config.schema_dir = expanded;
        self
    }

    /// Set the artifact filename (default: "schema.sql")
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.config.filename = filename.into();
        self
    }

    /// Set the default driver name (default: "mysql")
    #[must_use]
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.config.driver = driver.into();
        self
    }

    /// Set the bookkeeping table (default: "migrations")
    #[must_use]
    pub fn bookkeeping_table(mut self, table: impl Into<String>) -> Self {
        self.config.bookkeeping_table = table.into();
        self
    }

    /// Use a specific dump executable instead of the driver default
    #[must_use]
    pub fn dump_program(mut self, program: impl Into<String>) -> Self {
        self.config.dump_program = Some(program.into());
        self
    }

    /// Use a specific restore executable instead of the driver default
    #[must_use]
    pub fn restore_program(mut self, program: impl Into<String>) -> Self {
        self.config.restore_program = Some(program.into());
        self
    }

    /// Build the DumpConfig
    pub fn build(self) -> DumpConfig {
        self.config
    }
}

impl From<DumpConfig> for DumpConfigBuilder {
    fn from(config: DumpConfig) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = DumpConfig::builder().build();

        assert_eq!(config.schema_dir, PathBuf::from("database"));
        assert_eq!(config.filename, "schema.sql");
        assert_eq!(config.driver, "mysql");
        assert_eq!(config.bookkeeping_table, "migrations");
        assert_eq!(config.artifact_path(), PathBuf::from("database/schema.sql"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_with_options() {
        let config = DumpConfig::builder()
            .schema_dir("/srv/app/db")
            .filename("baseline.sql")
            .bookkeeping_table("schema_migrations")
            .dump_program("/opt/mysql/bin/mysqldump")
            .build();

        assert_eq!(
            config.artifact_path(),
            PathBuf::from("/srv/app/db/baseline.sql")
        );
        assert_eq!(
            config.artifact_path_for("other.sql"),
            PathBuf::from("/srv/app/db/other.sql")
        );
        assert_eq!(
            config.dump_program_for(Driver::MySql),
            "/opt/mysql/bin/mysqldump"
        );
        assert_eq!(config.restore_program_for(Driver::MySql), "mysql");
    }

    #[test]
    fn test_home_expansion() {
        let config = DumpConfig::builder().schema_dir("~/db").build();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.schema_dir, home.join("db"));
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty_file = DumpConfig::builder().filename("  ").build();
        assert!(matches!(empty_file.validate(), Err(Error::Config(_))));

        let empty_table = DumpConfig::builder().bookkeeping_table("").build();
        assert!(matches!(empty_table.validate(), Err(Error::Config(_))));

        let spaced_table = DumpConfig::builder()
            .bookkeeping_table("migrations; rm")
            .build();
        assert!(matches!(spaced_table.validate(), Err(Error::Config(_))));
    }
}
