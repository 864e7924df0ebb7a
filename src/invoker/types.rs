// Data types for Invoker module
#![allow(dead_code)]

use crate::invoker::env::HermeticEnv;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A single run of an external executable
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// Executable to run
    pub program: PathBuf,
    /// Arguments passed after the program, in order
    pub args: Vec<OsString>,
    /// Overrides merged over the ambient environment
    pub env: HermeticEnv,
    /// Working directory; inherited when unset
    pub working_dir: Option<PathBuf>,
}

impl InvocationRequest {
    pub fn new(program: impl Into<PathBuf>, env: HermeticEnv) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env,
            working_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Full command line: program followed by its arguments
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.as_os_str().to_os_string());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Command line rendered for log output
    pub fn display_command(&self) -> String {
        self.argv()
            .iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
