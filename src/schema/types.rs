//! Dump and load result types

use serde::Serialize;
use std::path::PathBuf;

use crate::driver::Driver;

/// Summary of a completed dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpReport {
    /// Artifact that was written
    pub path: PathBuf,

    /// Driver the dump was taken with
    pub driver: Driver,

    /// Artifact size after normalization, before the bookkeeping data was appended
    pub schema_bytes: u64,

    /// Final artifact size
    pub total_bytes: u64,

    /// `AUTO_INCREMENT=<n>` table options removed during normalization
    pub counters_removed: usize,

    /// Bookkeeping rows appended after the schema
    pub bookkeeping_rows: usize,
}

/// Outcome of a load that didn't fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The restore utility ran to completion
    Restored { driver: Driver, path: PathBuf },
    /// The operator did not confirm the target database is empty; nothing ran
    Declined,
}

impl LoadOutcome {
    #[must_use]
    pub fn is_declined(&self) -> bool {
        matches!(self, LoadOutcome::Declined)
    }
}
