// Hermetic environment for Conan invocations
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Conan reads its user-level configuration from `$CONAN_USER_HOME/.conan`.
pub const USER_HOME_VAR: &str = "CONAN_USER_HOME";

/// Conan appends a JSON trace of its actions to this file.
pub const TRACE_FILE_VAR: &str = "CONAN_TRACE_FILE";

/// Environment overrides applied on top of the ambient process environment.
///
/// Built fresh for every run and never written back into the current process.
/// Both isolation variables are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HermeticEnv {
    vars: BTreeMap<OsString, OsString>,
}

impl HermeticEnv {
    pub fn new(user_home: impl AsRef<Path>, trace_file: impl AsRef<Path>) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert(
            OsString::from(USER_HOME_VAR),
            user_home.as_ref().as_os_str().to_os_string(),
        );
        vars.insert(
            OsString::from(TRACE_FILE_VAR),
            trace_file.as_ref().as_os_str().to_os_string(),
        );
        Self { vars }
    }

    /// Value of an override, if set
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Merge the overrides over an ambient snapshot.
    ///
    /// Ambient variables with unrelated names pass through untouched; an
    /// ambient value for an isolation variable is always replaced.
    pub fn resolve<I, K, V>(&self, ambient: I) -> BTreeMap<OsString, OsString>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut resolved: BTreeMap<OsString, OsString> = ambient
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        for (key, value) in &self.vars {
            resolved.insert(key.clone(), value.clone());
        }
        resolved
    }
}
