//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for application plumbing (binary, server setup).
///
/// Library seams return the typed errors below; `anyhow` context is added on top
/// via `.context()` where they meet the binary.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when reading an employee roster fails.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The roster file could not be read.
    #[error("failed to read employee roster at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The roster file is not a valid employee list.
    #[error("failed to parse employee roster at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned when loading search configuration fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
