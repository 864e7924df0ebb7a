// End-to-end tests for the conan_init binary
// This file should be run with cargo test --test test_main

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;

// Writing an executable while another test forks can make exec fail with
// ETXTBSY; every test holds the lock for its whole run.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

/// Logs its arguments next to itself, records CONAN_DEFAULT_PROFILE_PATH if
/// set, and exits with FAKE_CONAN_EXIT (default 0).
const FAKE_CONAN: &str = r#"#!/bin/sh
dir=$(dirname "$0")
echo "$*" >> "$dir/calls.log"
if [ -n "$CONAN_DEFAULT_PROFILE_PATH" ]; then
    echo "$CONAN_DEFAULT_PROFILE_PATH" >> "$dir/leaked.log"
fi
exit ${FAKE_CONAN_EXIT:-0}
"#;

struct Fixture {
    dir: tempfile::TempDir,
    conan: PathBuf,
    home: PathBuf,
    trace: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let conan = dir.path().join("conan");
        std::fs::write(&conan, FAKE_CONAN).unwrap();
        std::fs::set_permissions(&conan, std::fs::Permissions::from_mode(0o755)).unwrap();
        let home = dir.path().join("home");
        std::fs::create_dir(&home).unwrap();
        let trace = dir.path().join("trace.log");

        Self {
            dir,
            conan,
            home,
            trace,
        }
    }

    /// Binary invocation with the three required options and a clean log setup
    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_conan_init"));
        cmd.arg("--conan")
            .arg(&self.conan)
            .arg("--user-home")
            .arg(&self.home)
            .arg("--trace-file")
            .arg(&self.trace)
            .current_dir(self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("CONAN_INIT_LOG")
            .env_remove("CONAN_DEFAULT_PROFILE_PATH")
            .env_remove("FAKE_CONAN_EXIT");
        cmd
    }

    fn calls(&self) -> Vec<String> {
        read_lines(&self.dir.path().join("calls.log"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_exits_zero() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let fx = Fixture::new();

        let output = fx.command().output().unwrap();

        assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
        assert_eq!(
            fx.calls(),
            vec!["remote add -f conancenter https://center.conan.io"]
        );
    }

    #[test]
    fn test_failing_conan_exits_one() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let fx = Fixture::new();

        let output = fx
            .command()
            .args(["--remote", "after=https://after.example.com"])
            .env("FAKE_CONAN_EXIT", "1")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(
            stderr(&output).contains("Failed to add remote 'conancenter'"),
            "stderr: {}",
            stderr(&output)
        );
        assert_eq!(fx.calls().len(), 1);
    }

    /// Bad arguments fail before conan is started
    #[test]
    fn test_missing_user_home_spawns_nothing() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let fx = Fixture::new();
        std::fs::remove_dir(&fx.home).unwrap();

        let output = fx.command().output().unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("does not exist"), "stderr: {}", stderr(&output));
        assert!(fx.calls().is_empty());
    }

    #[test]
    fn test_trace_file_directory_spawns_nothing() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let fx = Fixture::new();
        std::fs::create_dir(&fx.trace).unwrap();

        let output = fx.command().output().unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(fx.calls().is_empty());
    }

    #[test]
    fn test_log_level_from_env() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let fx = Fixture::new();

        let quiet = fx.command().output().unwrap();
        let verbose = fx.command().env("CONAN_INIT_LOG", "debug").output().unwrap();

        assert!(quiet.status.success());
        assert!(verbose.status.success());
        assert!(!stderr(&quiet).contains("configuration validated"));
        assert!(stderr(&verbose).contains("configuration validated"));
    }

    #[test]
    fn test_invalid_log_level_warns() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let fx = Fixture::new();

        let output = fx.command().env("CONAN_INIT_LOG", "loud").output().unwrap();

        assert!(output.status.success());
        let err = stderr(&output);
        assert!(err.contains("Invalid env var value"), "stderr: {err}");
        assert!(err.contains("loud"), "stderr: {err}");
    }

    /// `.env` sets the log level but its entries never reach conan
    #[test]
    fn test_dotenv_not_passed_to_conan() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let fx = Fixture::new();
        std::fs::write(
            fx.dir.path().join(".env"),
            "CONAN_INIT_LOG=debug\nCONAN_DEFAULT_PROFILE_PATH=/leaked/profile\n",
        )
        .unwrap();

        let output = fx.command().output().unwrap();

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(stderr(&output).contains("configuration validated"));
        assert_eq!(fx.calls().len(), 1);
        assert!(read_lines(&fx.dir.path().join("leaked.log")).is_empty());
    }
}
