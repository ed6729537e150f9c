//! Library error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a status report from the external command.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The process could not be started or its output could not be captured.
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to load application settings or the tunnel list.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
