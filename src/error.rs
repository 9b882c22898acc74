//! Error types for solution generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting a tree or writing a solution file.
#[derive(Debug, Error)]
pub enum SlnError {
    #[error("Please provide the directory to generate the sln file for.")]
    MissingDirectory,

    #[error("{0} is not a directory.")]
    NotADirectory(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to list directory {path:?}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write solution file {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SlnError {
    /// True for errors caused by how the tool was invoked rather than by I/O.
    pub fn is_usage(&self) -> bool {
        matches!(self, SlnError::MissingDirectory | SlnError::NotADirectory(_))
    }
}

impl From<config::ConfigError> for SlnError {
    fn from(err: config::ConfigError) -> Self {
        SlnError::Config(err.to_string())
    }
}
