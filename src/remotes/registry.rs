// Remote registration against an isolated Conan home

use crate::invoker::{CommandRunner, HermeticEnv, InvocationRequest};
use crate::remotes::error::RegistrationError;
use crate::remotes::types::Remote;
use std::path::Path;
use tracing::{debug, info};

/// `conan remote add -f <name> <url>`
///
/// `-f` replaces an existing remote of the same name, so repeated runs
/// against the same home converge on the same configuration.
pub fn remote_add_request(conan: &Path, env: &HermeticEnv, remote: &Remote) -> InvocationRequest {
    InvocationRequest::new(conan, env.clone()).args([
        "remote",
        "add",
        "-f",
        remote.name(),
        remote.url(),
    ])
}

/// Register remotes in order, stopping at the first failure
pub fn register_remotes<R>(
    runner: &R,
    conan: &Path,
    env: &HermeticEnv,
    remotes: &[Remote],
) -> Result<(), RegistrationError>
where
    R: CommandRunner + ?Sized,
{
    debug!(remote_count = remotes.len(), conan = %conan.display(), "registering remotes");

    for remote in remotes {
        let request = remote_add_request(conan, env, remote);
        runner
            .run(&request)
            .map_err(|source| RegistrationError::Remote {
                name: remote.name().to_string(),
                source,
            })?;
        info!(name = %remote.name(), url = %remote.url(), "remote registered");
    }

    Ok(())
}
