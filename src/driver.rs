//! Database driver registry
//!
//! Maps user-supplied driver names onto the closed set of engines that
//! commands can be built for.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported database engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// MySQL (and compatible servers), dumped with `mysqldump` and restored with `mysql`
    #[default]
    MySql,
}

impl Driver {
    /// Every driver commands can be built for
    pub const ALL: &'static [Driver] = &[Driver::MySql];

    /// Canonical lowercase name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Driver::MySql => "mysql",
        }
    }

    /// Default executable used to dump a database
    #[must_use]
    pub fn dump_program(self) -> &'static str {
        match self {
            Driver::MySql => "mysqldump",
        }
    }

    /// Default executable used to replay a dump
    #[must_use]
    pub fn restore_program(self) -> &'static str {
        match self {
            Driver::MySql => "mysql",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of looking a driver name up in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverSupport {
    /// Commands can be built for this driver
    Supported(Driver),
    /// A known engine without an implementation yet
    Recognized(String),
    /// Not a database engine we know about
    Unknown(String),
}

impl DriverSupport {
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, DriverSupport::Supported(_))
    }
}

/// Registry of supported and recognized driver names
#[derive(Debug, Clone)]
pub struct DriverRegistry {
    supported: Vec<Driver>,
    recognized: Vec<&'static str>,
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self {
            supported: Driver::ALL.to_vec(),
            recognized: vec!["postgres"],
        }
    }
}

impl DriverRegistry {
    /// Create the default registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a driver name for lookup (trimmed, lowercase)
    #[must_use]
    pub fn normalize(name: &str) -> String {
        name.trim().to_ascii_lowercase()
    }

    /// Classify a driver name
    #[must_use]
    pub fn lookup(&self, name: &str) -> DriverSupport {
        let normalized = Self::normalize(name);

        if let Some(driver) = self
            .supported
            .iter()
            .copied()
            .find(|d| d.name() == normalized)
        {
            return DriverSupport::Supported(driver);
        }

        if self.recognized.contains(&normalized.as_str()) {
            DriverSupport::Recognized(normalized)
        } else {
            DriverSupport::Unknown(normalized)
        }
    }

    /// Check if commands can be built for the given driver name
    #[must_use]
    pub fn is_supported(&self, name: &str) -> bool {
        self.lookup(name).is_supported()
    }

    /// Resolve a driver name, failing for anything not supported
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDriver`] for recognized-but-unimplemented and unknown names.
    pub fn resolve(&self, name: &str) -> Result<Driver> {
        match self.lookup(name) {
            DriverSupport::Supported(driver) => Ok(driver),
            DriverSupport::Recognized(name) => Err(Error::UnsupportedDriver {
                name,
                recognized: true,
            }),
            DriverSupport::Unknown(name) => Err(Error::UnsupportedDriver {
                name,
                recognized: false,
            }),
        }
    }

    /// Names of all supported drivers, for user guidance
    #[must_use]
    pub fn supported(&self) -> Vec<&'static str> {
        self.supported.iter().map(|d| d.name()).collect()
    }
}
