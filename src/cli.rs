//! Command-line surface
//!
//! Parses and validates arguments before anything is spawned. The remote
//! list is assembled from the built-in default, an optional TOML file and
//! repeated `--remote NAME=URL` flags, in that order.

use crate::invoker::HermeticEnv;
use crate::remotes::{Remote, RemoteError, RemotesFileError, default_remotes, load_remotes_file};
use clap::Parser;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{Level, debug};

/// Environment variable selecting the log level
pub const LOG_LEVEL_VAR: &str = "CONAN_INIT_LOG";

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "conan_init")]
#[command(about = "Initialise a Conan home directory.")]
pub struct Args {
    /// Path to the Conan executable.
    #[arg(long, value_name = "FILE")]
    pub conan: PathBuf,

    /// Path to the Conan base directory.
    #[arg(long, value_name = "PATH")]
    pub user_home: PathBuf,

    /// Write Conan trace log to this file.
    #[arg(long, value_name = "PATH")]
    pub trace_file: PathBuf,

    /// Additional remote to register, as NAME=URL (repeatable)
    #[arg(long = "remote", value_name = "NAME=URL")]
    pub remotes: Vec<String>,

    /// TOML file listing remotes as [[remote]] tables
    #[arg(long, value_name = "PATH")]
    pub remotes_file: Option<PathBuf>,

    /// Do not register the built-in conancenter remote
    #[arg(long)]
    pub no_default_remotes: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Configuration errors, reported before any process is started
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Conan executable path must not be empty")]
    EmptyConan,

    #[error("Conan user home '{}' does not exist", .0.display())]
    UserHomeMissing(PathBuf),

    #[error("Conan user home '{}' is not a directory", .0.display())]
    UserHomeNotDirectory(PathBuf),

    #[error("Directory for trace file '{}' does not exist", .0.display())]
    TraceDirMissing(PathBuf),

    #[error("Trace file '{}' is a directory", .0.display())]
    TraceFileIsDirectory(PathBuf),

    #[error(transparent)]
    RemotesFile(#[from] RemotesFileError),

    #[error("Invalid --remote value: {0}")]
    InvalidRemote(#[from] RemoteError),
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct InitConfig {
    pub conan: PathBuf,
    pub user_home: PathBuf,
    pub trace_file: PathBuf,
    pub remotes: Vec<Remote>,
}

impl InitConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if args.conan.as_os_str().is_empty() {
            return Err(ConfigError::EmptyConan);
        }

        check_user_home(&args.user_home)?;
        check_trace_file(&args.trace_file)?;

        let mut remotes = if args.no_default_remotes {
            Vec::new()
        } else {
            default_remotes()
        };
        if let Some(path) = &args.remotes_file {
            remotes.extend(load_remotes_file(path)?);
        }
        for spec in &args.remotes {
            remotes.push(spec.parse::<Remote>()?);
        }

        debug!(
            conan = %args.conan.display(),
            user_home = %args.user_home.display(),
            trace_file = %args.trace_file.display(),
            remote_count = remotes.len(),
            "configuration validated"
        );

        Ok(Self {
            conan: args.conan.clone(),
            user_home: args.user_home.clone(),
            trace_file: args.trace_file.clone(),
            remotes,
        })
    }

    /// Environment overrides shared by every invocation of this run
    pub fn hermetic_env(&self) -> HermeticEnv {
        HermeticEnv::new(&self.user_home, &self.trace_file)
    }
}

fn check_user_home(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::UserHomeMissing(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ConfigError::UserHomeNotDirectory(path.to_path_buf()));
    }
    Ok(())
}

fn check_trace_file(trace_file: &Path) -> Result<(), ConfigError> {
    if trace_file.is_dir() {
        return Err(ConfigError::TraceFileIsDirectory(trace_file.to_path_buf()));
    }
    let parent = match trace_file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(ConfigError::TraceDirMissing(trace_file.to_path_buf()));
    }
    Ok(())
}

/// Selected log level, plus the `CONAN_INIT_LOG` value if it was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevel {
    pub level: Level,
    pub invalid: Option<String>,
}

/// Log level from `-v` flags, falling back to `CONAN_INIT_LOG`, then `info`.
///
/// `CONAN_INIT_LOG` is taken from the environment or else from a `.env` file.
/// The `.env` file is read without loading it into the process environment,
/// so none of its entries reach Conan.
pub fn log_level(verbose: u8) -> LogLevel {
    let configured = if verbose == 0 {
        configured_log_level()
    } else {
        None
    };
    parse_log_level(verbose, configured.as_deref())
}

pub fn parse_log_level(verbose: u8, configured: Option<&str>) -> LogLevel {
    let level = match verbose {
        0 => None,
        1 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    };
    if let Some(level) = level {
        return LogLevel {
            level,
            invalid: None,
        };
    }

    match configured.map(|v| (v, v.trim().parse::<Level>())) {
        Some((_, Ok(level))) => LogLevel {
            level,
            invalid: None,
        },
        Some((v, Err(_))) => LogLevel {
            level: Level::INFO,
            invalid: Some(v.to_string()),
        },
        None => LogLevel {
            level: Level::INFO,
            invalid: None,
        },
    }
}

fn configured_log_level() -> Option<String> {
    if let Ok(v) = std::env::var(LOG_LEVEL_VAR) {
        return Some(v);
    }
    dotenvy::dotenv_iter()
        .ok()?
        .filter_map(Result::ok)
        .find(|(key, _)| key == LOG_LEVEL_VAR)
        .map(|(_, value)| value)
}
