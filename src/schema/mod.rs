//! Schema dump and load
//!
//! The artifact is the schema DDL (no data, no `DROP`s, no auto-increment
//! counters) followed by one newline and the bookkeeping table's INSERT, one
//! row per line.

mod dump;
mod restore;
mod transform;
mod types;

pub use dump::SchemaDumper;
pub use restore::{Confirm, EMPTY_DATABASE_PROMPT, SchemaRestorer};
pub use transform::{count_rows, format_bookkeeping_rows, strip_auto_increment};
pub use types::{DumpReport, LoadOutcome};
