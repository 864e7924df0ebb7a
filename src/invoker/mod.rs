// Invoker module - runs the Conan executable against an isolated home directory
#![allow(unused_imports)]

pub mod env;
pub mod error;
pub mod runner;
pub mod types;

pub use env::{HermeticEnv, TRACE_FILE_VAR, USER_HOME_VAR};
pub use error::{InvokerError, Result};
pub use runner::{CommandRunner, ProcessRunner};
pub use types::InvocationRequest;
