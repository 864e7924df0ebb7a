// Error types for Invoker module

use std::path::PathBuf;
use thiserror::Error;

/// Invoker error types
#[derive(Debug, Error)]
pub enum InvokerError {
    #[error("Failed to spawn '{}': {source}", .program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' exited with status {code}", .program.display())]
    NonZeroExit { program: PathBuf, code: i32 },

    #[error("'{}' was terminated{}", .program.display(), signal_suffix(.signal))]
    Terminated {
        program: PathBuf,
        signal: Option<i32>,
    },
}

fn signal_suffix(signal: &Option<i32>) -> String {
    match signal {
        Some(sig) => format!(" by signal {sig}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, InvokerError>;
