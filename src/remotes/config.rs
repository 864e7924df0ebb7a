// Remote sources: built-in default and TOML file
#![allow(dead_code)]

use crate::remotes::error::RemotesFileError;
use crate::remotes::types::Remote;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Remote registered unless disabled on the command line
pub const DEFAULT_REMOTE: (&str, &str) = ("conancenter", "https://center.conan.io");

pub fn default_remotes() -> Vec<Remote> {
    let (name, url) = DEFAULT_REMOTE;
    vec![Remote::builtin(name, url)]
}

/// Remotes file layout:
///
/// ```toml
/// [[remote]]
/// name = "mirror"
/// url = "https://conan.example.com/artifactory/api/conan/conan"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemotesFile {
    #[serde(default, rename = "remote")]
    pub remotes: Vec<Remote>,
}

impl RemotesFile {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Load remotes from a TOML file, in file order
pub fn load_remotes_file(path: &Path) -> Result<Vec<Remote>, RemotesFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| RemotesFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = RemotesFile::parse(&content).map_err(|source| RemotesFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), remote_count = file.remotes.len(), "loaded remotes file");
    Ok(file.remotes)
}
