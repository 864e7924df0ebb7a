// Data types for Remotes module
#![allow(dead_code)]

use crate::remotes::error::RemoteError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A named package source for Conan
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRemote")]
pub struct Remote {
    name: String,
    url: String,
}

impl Remote {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self, RemoteError> {
        let name = name.into();
        let url = url.into();

        if name.is_empty() {
            return Err(RemoteError::EmptyName);
        }
        if name.chars().any(|c| c.is_whitespace() || c == '=') {
            return Err(RemoteError::InvalidName(name));
        }
        if url.is_empty() {
            return Err(RemoteError::EmptyUrl(name));
        }
        if url.chars().any(char::is_whitespace) {
            return Err(RemoteError::InvalidUrl(name, url));
        }

        Ok(Self { name, url })
    }

    /// For compile-time constants known to pass validation
    pub(crate) fn builtin(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.url)
    }
}

/// Parses `NAME=URL`; the URL may itself contain `=`
impl FromStr for Remote {
    type Err = RemoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, url) = s
            .split_once('=')
            .ok_or_else(|| RemoteError::MissingSeparator(s.to_string()))?;
        Remote::new(name.trim(), url.trim())
    }
}

#[derive(Deserialize)]
struct RawRemote {
    name: String,
    url: String,
}

impl TryFrom<RawRemote> for Remote {
    type Error = RemoteError;

    fn try_from(raw: RawRemote) -> Result<Self, Self::Error> {
        Remote::new(raw.name, raw.url)
    }
}
