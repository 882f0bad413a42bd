//! Schema manager
//!
//! [`SchemaManager`] is the composition root: it owns the configuration, the
//! connection parameters, the driver registry and the process runner, and hands
//! out the dump and restore pipelines.

mod builder;
mod core;

pub use builder::SchemaManagerBuilder;
pub use self::core::SchemaManager;
