// Remotes module - remote definitions and their registration
#![allow(unused_imports)]

pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::{DEFAULT_REMOTE, RemotesFile, default_remotes, load_remotes_file};
pub use error::{RegistrationError, RemoteError, RemotesFileError};
pub use registry::{register_remotes, remote_add_request};
pub use types::Remote;
