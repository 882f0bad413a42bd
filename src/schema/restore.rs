//! Loading an artifact into an empty database

use log::{debug, info};
use std::path::Path;

use super::types::LoadOutcome;
use crate::error::Result;
use crate::manager::SchemaManager;
use crate::process::ProcessRunner;

/// Question the operator must answer before anything is restored
pub const EMPTY_DATABASE_PROMPT: &str =
    "This command requires that the target database is empty (no existing tables).  Continue?";

/// Operator acknowledgement that the target database is empty
///
/// Implemented for `bool` (a pre-made answer) and for any `Fn(&str) -> bool`,
/// which receives [`EMPTY_DATABASE_PROMPT`].
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Replays a schema artifact for a [`SchemaManager`]
pub struct SchemaRestorer<'a, R: ProcessRunner> {
    manager: &'a SchemaManager<R>,
}

impl<'a, R: ProcessRunner> SchemaRestorer<'a, R> {
    pub fn new(manager: &'a SchemaManager<R>) -> Self {
        Self { manager }
    }

    /// Load `input` into the configured database
    ///
    /// The operator is asked to confirm the database is empty first. Declining is
    /// not an error: it returns [`LoadOutcome::Declined`] without running anything.
    /// `input` is handed to the restore utility as-is (a FIFO works too), so a
    /// missing file surfaces as the utility's failure. A failed restore is not
    /// rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDriver`](crate::Error::UnsupportedDriver) before
    /// prompting, or the restore utility's failure.
    pub fn load<C>(&self, driver: &str, input: &Path, confirm: &C) -> Result<LoadOutcome>
    where
        C: Confirm + ?Sized,
    {
        let builder = self.manager.command_builder(driver)?;

        if !confirm.confirm(EMPTY_DATABASE_PROMPT) {
            debug!("Load of {} declined", input.display());
            return Ok(LoadOutcome::Declined);
        }

        info!(
            "Loading {} into '{}'",
            input.display(),
            self.manager.connection().database
        );
        let command = builder.restore(self.manager.connection(), input);
        self.manager.runner().run(&command)?;

        info!("Schema load finished");
        Ok(LoadOutcome::Restored {
            driver: builder.driver(),
            path: input.to_path_buf(),
        })
    }
}
