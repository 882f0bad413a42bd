//! Config file formats for connection parameters
//!
//! JSON is always available; TOML and YAML are behind the `toml` and `yaml`
//! features.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Trait for config file format implementations
pub trait ConfigFormat {
    /// File extensions handled by this format (e.g. "json")
    fn extensions(&self) -> &[&'static str];

    /// Deserialize data from string
    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T>;

    /// Read and deserialize from file
    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = crate::error::read_file(path)?;
        self.deserialize(&content)
    }
}

/// JSON format (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl ConfigFormat for JsonFormat {
    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        serde_json::from_str(content).map_err(Error::from)
    }
}

/// TOML format
#[cfg(feature = "toml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlFormat;

#[cfg(feature = "toml")]
impl ConfigFormat for TomlFormat {
    fn extensions(&self) -> &[&'static str] {
        &["toml"]
    }

    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }
}

/// YAML format
#[cfg(feature = "yaml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

#[cfg(feature = "yaml")]
impl ConfigFormat for YamlFormat {
    fn extensions(&self) -> &[&'static str] {
        &["yaml", "yml"]
    }

    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        serde_yaml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }
}

/// Read a config file, picking the format from its extension
pub(crate) fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::PathNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if JsonFormat.extensions().contains(&extension.as_str()) {
        return JsonFormat.read(path);
    }

    #[cfg(feature = "toml")]
    if TomlFormat.extensions().contains(&extension.as_str()) {
        return TomlFormat.read(path);
    }

    #[cfg(feature = "yaml")]
    if YamlFormat.extensions().contains(&extension.as_str()) {
        return YamlFormat.read(path);
    }

    Err(Error::Config(format!(
        "Unsupported connection file format '{}' (enable the matching feature)",
        path.display()
    )))
}
