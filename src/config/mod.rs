//! Configuration types
//!
//! This module contains:
//! - `DumpConfig` - Artifact location, default driver, bookkeeping table and program overrides
//! - `ConnectionParams` - Host, port, credentials and database name
//! - `EnvSource` - Where connection parameters are read from
//! - `ConfigFormat` - File formats connection parameters can be loaded from

mod connection;
mod format;
mod types;

pub use connection::{
    ConnectionParams, DefaultEnvSource, ENV_DATABASE, ENV_HOST, ENV_PASSWORD, ENV_PORT,
    ENV_USERNAME, EnvSource, MapEnvSource,
};
#[cfg(feature = "toml")]
pub use format::TomlFormat;
#[cfg(feature = "yaml")]
pub use format::YamlFormat;
pub use format::{ConfigFormat, JsonFormat};
pub use types::{
    DEFAULT_BOOKKEEPING_TABLE, DEFAULT_FILENAME, DEFAULT_SCHEMA_DIR, DumpConfig,
    DumpConfigBuilder,
};
