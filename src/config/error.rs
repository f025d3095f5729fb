//! Configuration error types for the config module.
//!
//! None of these escape [`crate::config::initialize`]; the fail-open layer
//! turns them into `warn!` events and carries on with whatever it has.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file exists at any discovery path
    #[error("Configuration file not found (tried: {})", display_paths(.tried))]
    NotFound { tried: Vec<PathBuf> },

    /// The running executable's path could not be determined
    #[error("Failed to determine executable path: {0}")]
    ExecutablePath(#[source] std::io::Error),

    /// The current working directory could not be determined
    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// Failed to open or read the config file
    #[error("Failed to read configuration file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `section.key` path did not contain a section separator
    #[error("Invalid key path '{0}': expected <section>.<key>")]
    InvalidKeyPath(String),
}

impl ConfigError {
    /// Create a read error for `path`
    pub fn read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<no candidates>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
