mod cli;
mod invoker;
mod remotes;

use clap::Parser;
use cli::{Args, InitConfig};
use invoker::ProcessRunner;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::fmt;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = cli::log_level(args.verbose);

    // Logs go to stderr; stdout belongs to Conan
    fmt()
        .with_max_level(log_level.level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    if let Some(value) = &log_level.invalid {
        warn!(var = cli::LOG_LEVEL_VAR, value = %value, "Invalid env var value, using default");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "conan home initialization failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = InitConfig::from_args(args)?;
    let env = config.hermetic_env();

    info!(
        user_home = %config.user_home.display(),
        remotes = config.remotes.len(),
        "initializing conan home"
    );

    remotes::register_remotes(&ProcessRunner::new(), &config.conan, &env, &config.remotes)?;

    info!("conan home initialized");
    Ok(())
}
