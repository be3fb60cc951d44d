//! Shared test harness for giturl integration tests.
//!
//! Runs the compiled binary with a pinned environment so log filtering does
//! not depend on the caller's `RUST_LOG`.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Path to the compiled `giturl` binary.
pub fn giturl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_giturl"))
}

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(giturl_bin());
    cmd.args(args).env_remove("RUST_LOG");
    cmd
}

fn collect(output: std::process::Output) -> CommandResult {
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// Run giturl with the given arguments.
pub fn giturl(args: &[&str]) -> CommandResult {
    let output = command(args).output().expect("failed to run giturl");
    collect(output)
}

/// Run giturl with piped stdin.
pub fn giturl_stdin(args: &[&str], stdin_bytes: &[u8]) -> CommandResult {
    let mut cmd = command(args);
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("failed to spawn giturl");
    child.stdin.take().unwrap().write_all(stdin_bytes).unwrap();
    let output = child.wait_with_output().expect("failed to wait on giturl");
    collect(output)
}

/// Assert the command succeeded, printing stderr otherwise.
pub fn assert_success(result: &CommandResult) {
    assert_eq!(
        result.exit_code, 0,
        "expected success, got {}\nstderr: {}",
        result.exit_code, result.stderr
    );
}
