//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Path to the prereq binary built by cargo for this test run
pub fn prereq_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_prereq"))
}

/// Run the prereq binary in the specified directory
pub fn run_prereq_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(prereq_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("PREREQ_ASCII", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute prereq binary")
}

/// Run the prereq binary with `stdin` piped in
pub fn run_prereq_with_input(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(prereq_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("PREREQ_ASCII", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn prereq binary");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for prereq binary")
}

/// Write a matrix file named `name` into `dir` and return its path
pub fn write_matrix(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write matrix file");
    path
}
