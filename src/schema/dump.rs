//! Schema dump pipeline

use log::{debug, info, warn};
use std::path::Path;

use super::transform::{count_rows, format_bookkeeping_rows, strip_auto_increment};
use super::types::DumpReport;
use crate::command::CommandBuilder;
use crate::error::{Error, Result, append_file, create_dir, file_size, read_file, rewrite_file};
use crate::manager::SchemaManager;
use crate::process::ProcessRunner;

/// Produces the schema artifact for a [`SchemaManager`]
pub struct SchemaDumper<'a, R: ProcessRunner> {
    manager: &'a SchemaManager<R>,
}

impl<'a, R: ProcessRunner> SchemaDumper<'a, R> {
    pub fn new(manager: &'a SchemaManager<R>) -> Self {
        Self { manager }
    }

    /// Dump the schema and bookkeeping rows to `output`
    ///
    /// Runs, in order: a structure-only dump straight into `output`, removal of
    /// `AUTO_INCREMENT=<n>` counters, and a data-only dump of the bookkeeping table
    /// appended one row per line after a single newline.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedDriver`] before anything runs, or with the first
    /// process or file error. A partially written artifact is left in place.
    pub fn dump(&self, driver: &str, output: &Path) -> Result<DumpReport> {
        let builder = self.manager.command_builder(driver)?;
        info!(
            "Dumping {} schema of '{}' to {}",
            builder.driver(),
            self.manager.connection().database,
            output.display()
        );

        self.extract_schema(&builder, output)?;
        let counters_removed = self.normalize(output)?;
        let schema_bytes = file_size(output)?;
        let bookkeeping_rows = self.append_bookkeeping_data(&builder, output)?;
        let total_bytes = file_size(output)?;

        info!(
            "Schema dump finished: {} bytes, {} bookkeeping rows",
            total_bytes, bookkeeping_rows
        );

        Ok(DumpReport {
            path: output.to_path_buf(),
            driver: builder.driver(),
            schema_bytes,
            total_bytes,
            counters_removed,
            bookkeeping_rows,
        })
    }

    /// Step 1: structure-only dump written directly by the utility
    fn extract_schema(&self, builder: &CommandBuilder, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                create_dir(parent)?;
                debug!("Created {}", parent.display());
            }
        }

        let command = builder.schema_dump(self.manager.connection(), output);
        self.manager.runner().run(&command)?;

        if !output.exists() {
            return Err(Error::PathNotFound(output.to_path_buf()));
        }
        debug!("Schema written: {} bytes", file_size(output)?);
        Ok(())
    }

    /// Step 2: drop auto-increment counters so identical schemas dump identically
    ///
    /// The artifact is rewritten in place, keeping its permissions and inode.
    fn normalize(&self, output: &Path) -> Result<usize> {
        let content = read_file(output)?;
        let (normalized, removed) = strip_auto_increment(&content);

        if removed > 0 {
            rewrite_file(output, normalized.as_bytes())?;
        }
        debug!("Removed {removed} AUTO_INCREMENT counters");
        Ok(removed)
    }

    /// Step 3: append the bookkeeping table's rows, one per line
    fn append_bookkeeping_data(&self, builder: &CommandBuilder, output: &Path) -> Result<usize> {
        let command = builder.bookkeeping_data_dump(self.manager.connection());
        let rows = self.manager.runner().run(&command)?;

        if rows.trim().is_empty() {
            warn!(
                "Table '{}' is empty; the artifact will contain no bookkeeping rows",
                self.manager.config().bookkeeping_table
            );
        }

        append_file(output, format!("\n{}", format_bookkeeping_rows(&rows)))?;
        Ok(count_rows(&rows))
    }
}
