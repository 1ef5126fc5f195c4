//! The fallback sink must write to the process's standard output.
//!
//! Exercised through the `stdout-sink-probe` binary so the real stdout
//! stream is captured.

use assert_cmd::Command;
use predicates::prelude::*;

fn probe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stdout-sink-probe"))
}

#[test]
fn log_at_level_zero_reaches_stdout() {
    probe()
        .args(["0", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foo"))
        .stdout(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn every_severity_is_written() {
    for (level, label) in [("1", "INFO"), ("2", "WARN"), ("3", "ERROR"), ("4", "FATAL"), ("5", "ANY")] {
        probe()
            .args([level, "payload"])
            .assert()
            .success()
            .stdout(predicate::str::contains(label).and(predicate::str::contains("payload")));
    }
}

#[test]
fn invalid_level_is_rejected() {
    probe()
        .args(["9", "foo"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid severity level"));
}

#[test]
fn non_numeric_level_is_a_usage_error() {
    probe()
        .args(["debug", "foo"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'debug'"));
}

#[test]
fn missing_message_is_a_usage_error() {
    probe()
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<MESSAGE>"));
}
