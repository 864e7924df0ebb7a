// Error types for Remotes module

use crate::invoker::InvokerError;
use std::path::PathBuf;
use thiserror::Error;

/// A remote definition that Conan would reject or misparse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Remote name must not be empty")]
    EmptyName,

    #[error("Remote name '{0}' must not contain whitespace or '='")]
    InvalidName(String),

    #[error("Remote '{0}' has an empty URL")]
    EmptyUrl(String),

    #[error("Remote '{0}' has a URL containing whitespace: {1}")]
    InvalidUrl(String, String),

    #[error("Expected NAME=URL, got '{0}'")]
    MissingSeparator(String),
}

/// Registration stops at the first failing remote
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Failed to add remote '{name}': {source}")]
    Remote {
        name: String,
        #[source]
        source: InvokerError,
    },
}

/// Remotes file could not be used
#[derive(Debug, Error)]
pub enum RemotesFileError {
    #[error("Failed to read remotes file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid remotes file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
