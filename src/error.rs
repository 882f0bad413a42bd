//! Error types for schemadump

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for schemadump operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for schemadump
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Driver Errors
    // -------------------------------------------------------------------------
    /// The requested driver is not in the registry.
    ///
    /// `recognized` is true for engines that are known but not implemented yet.
    #[error("Unsupported database driver: '{name}'")]
    UnsupportedDriver { name: String, recognized: bool },

    // -------------------------------------------------------------------------
    // Process Errors
    // -------------------------------------------------------------------------
    #[error("Command failed with exit code {}: {command}\n{stderr}", display_code(.code))]
    ProcessFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to start command '{command}': {source}")]
    ProcessSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command produced non UTF-8 output: {command}")]
    InvalidOutput {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Failed to parse connection file: {0}")]
    Parse(String),

    #[error("Failed to parse JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "<signal>".to_string(), |c| c.to_string())
}

impl Error {
    /// Check if this is an unsupported driver error
    #[must_use]
    pub fn is_unsupported_driver(&self) -> bool {
        matches!(self, Error::UnsupportedDriver { .. })
    }

    /// Check if an external command failed or could not be started
    #[must_use]
    pub fn is_process_failure(&self) -> bool {
        matches!(
            self,
            Error::ProcessFailed { .. } | Error::ProcessSpawn { .. } | Error::InvalidOutput { .. }
        )
    }

    /// Exit code of the failed external command, if there was one
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::ProcessFailed { code, .. } => *code,
            _ => None,
        }
    }
}

// =============================================================================
// Filesystem Helper Functions
// =============================================================================
// These reduce repetitive map_err patterns in the pipeline.

/// Read a whole file as UTF-8 text
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Create a directory (and parents) with proper error handling
pub(crate) fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Overwrite an existing file's contents in place
///
/// The file keeps its inode, permissions and any symlink pointing at it.
pub(crate) fn rewrite_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    use std::io::Write;

    let write_err = |e: std::io::Error| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(contents.as_ref()).map_err(write_err)?;
    file.flush().map_err(write_err)
}

/// Append to the end of an existing file
pub(crate) fn append_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    use std::io::Write;

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    file.write_all(contents.as_ref())
        .map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Current size of a file in bytes
pub(crate) fn file_size(path: &Path) -> Result<u64> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}
