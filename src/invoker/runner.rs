// Process runner for Invoker module

use crate::invoker::error::{InvokerError, Result};
use crate::invoker::types::InvocationRequest;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs an invocation to completion
pub trait CommandRunner {
    /// Succeeds only if the process exits with status zero
    fn run(&self, request: &InvocationRequest) -> Result<()>;
}

/// Runs invocations as child processes with inherited stdio.
///
/// Blocks until the child exits. There is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, request: &InvocationRequest) -> Result<()> {
        let start = Instant::now();
        let env = request.env.resolve(std::env::vars_os());

        debug!(
            command = %request.display_command(),
            working_dir = ?request.working_dir,
            env_vars = env.len(),
            "spawning process"
        );

        let mut command = Command::new(&request.program);
        command
            .args(&request.args)
            .env_clear()
            .envs(&env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &request.working_dir {
            command.current_dir(dir);
        }

        let status = command
            .status()
            .map_err(|source| InvokerError::SpawnFailed {
                program: request.program.clone(),
                source,
            })?;

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            command = %request.display_command(),
            duration_ms = duration_ms,
            exit_code = status.code().unwrap_or(-1),
            "process exited"
        );

        check_status(request, status)
    }
}

fn check_status(request: &InvocationRequest, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(InvokerError::NonZeroExit {
            program: request.program.clone(),
            code,
        }),
        None => {
            let signal = termination_signal(&status);
            warn!(command = %request.display_command(), signal = ?signal, "process killed by signal");
            Err(InvokerError::Terminated {
                program: request.program.clone(),
                signal,
            })
        }
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
