//! # schemadump
//!
//! Capture a database's schema together with its migration history in one
//! portable, diff-friendly SQL file, and replay that file into an empty database.
//!
//! ## Features
//!
//! - **Schema dump**: structure only (tables, indexes, routines), without `DROP`s,
//!   lock statements, comment banners or charset statements
//! - **Normalization**: `AUTO_INCREMENT=<n>` counters are stripped so identical
//!   schemas always produce identical files
//! - **Bookkeeping rows**: the migrations table is appended one row per line, so
//!   changes review well in version control
//! - **Load**: gated behind an explicit "the target database is empty" confirmation
//! - **Pluggable execution**: commands run through a [`ProcessRunner`]; the default
//!   [`ShellRunner`] uses the platform shell
//!
//! Supported drivers: `mysql` (via `mysqldump` and `mysql`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use schemadump::{LoadOutcome, SchemaManager};
//!
//! # fn example() -> schemadump::Result<()> {
//! // Connection parameters come from DB_HOST, DB_PORT, DB_USERNAME,
//! // DB_PASSWORD and DB_DATABASE unless given explicitly.
//! let manager = SchemaManager::builder()
//!     .schema_dir("database")
//!     .build()?;
//!
//! let path = manager.config().artifact_path();
//! let report = manager.dump("mysql", &path)?;
//! println!("{} bytes, {} migrations", report.total_bytes, report.bookkeeping_rows);
//!
//! let outcome = manager.load("mysql", &path, &|question: &str| {
//!     println!("{question} [y/N]");
//!     false
//! })?;
//! assert_eq!(outcome, LoadOutcome::Declined);
//! # Ok(())
//! # }
//! ```
//!
//! ## Artifact layout
//!
//! ```text
//! CREATE TABLE `users` (
//!   ...
//! ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;
//!
//! INSERT INTO `migrations` VALUES
//!     (1,'2014_10_12_000000_create_users_table',1),
//!     (2,'2019_08_19_000000_create_failed_jobs_table',1);
//! ```

mod error;

pub mod command;
pub mod config;
pub mod console;
pub mod driver;
pub mod manager;
pub mod process;
pub mod schema;

pub use error::{Error, Result};

pub use command::{CommandBuilder, CommandKind, CommandLine};
pub use config::{ConnectionParams, DefaultEnvSource, DumpConfig, EnvSource, MapEnvSource};
pub use console::{CommandOptions, CommandStatus, Console, SchemaAction, SchemaCommand};
pub use driver::{Driver, DriverRegistry, DriverSupport};
pub use manager::{SchemaManager, SchemaManagerBuilder};
pub use process::{ProcessRunner, ShellRunner};
pub use schema::{Confirm, DumpReport, LoadOutcome, SchemaDumper, SchemaRestorer};
