//! Connection parameters and where they come from
//!
//! The core never opens a connection itself. These values are only spliced
//! into the command lines handed to the dump and restore utilities.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::Result;

pub const ENV_HOST: &str = "DB_HOST";
pub const ENV_PORT: &str = "DB_PORT";
pub const ENV_USERNAME: &str = "DB_USERNAME";
pub const ENV_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DATABASE: &str = "DB_DATABASE";

/// Source of environment variables
///
/// Abstracted so embedders and tests can supply values without touching the
/// process environment.
pub trait EnvSource: Send + Sync {
    /// Look up a variable by name
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEnvSource;

impl EnvSource for DefaultEnvSource {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Host, port, credentials and database name for the external utilities
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionParams {
    pub host: String,
    pub port: String,
    #[serde(alias = "user")]
    pub username: String,
    pub password: String,
    #[serde(alias = "database_name")]
    pub database: String,
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"*****")
            .field("database", &self.database)
            .finish()
    }
}

impl ConnectionParams {
    /// Create connection parameters from explicit values
    pub fn new(
        host: impl Into<String>,
        port: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            username: username.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    /// Read `DB_HOST`, `DB_PORT`, `DB_USERNAME`, `DB_PASSWORD` and `DB_DATABASE`
    /// from the process environment
    pub fn from_env() -> Self {
        Self::from_env_source(&DefaultEnvSource)
    }

    /// Read the `DB_*` variables from the given source
    ///
    /// Missing variables become empty strings; nothing is validated here.
    pub fn from_env_source(source: &dyn EnvSource) -> Self {
        let params = Self {
            host: source.var(ENV_HOST).unwrap_or_default(),
            port: source.var(ENV_PORT).unwrap_or_default(),
            username: source.var(ENV_USERNAME).unwrap_or_default(),
            password: source.var(ENV_PASSWORD).unwrap_or_default(),
            database: source.var(ENV_DATABASE).unwrap_or_default(),
        };

        let missing = params.missing_fields();
        if !missing.is_empty() {
            warn!("Connection parameters not set: {}", missing.join(", "));
        }
        params
    }

    /// Load connection parameters from a JSON, TOML or YAML file (by extension)
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, its format is not enabled,
    /// or it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        super::format::read_config(path)
    }

    /// Names of the environment variables whose values are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (ENV_HOST, &self.host),
            (ENV_PORT, &self.port),
            (ENV_USERNAME, &self.username),
            (ENV_PASSWORD, &self.password),
            (ENV_DATABASE, &self.database),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
