//! Integration tests for the primesum CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn primesum() -> Command {
    Command::cargo_bin("primesum").unwrap()
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    primesum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("producer/consumer"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    primesum()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("primesum"));
}

/// Missing limit is a usage error with exit code 1
#[test]
fn test_missing_limit() {
    primesum()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

/// Non-numeric limit is a usage error with exit code 1
#[test]
fn test_non_numeric_limit() {
    primesum()
        .arg("twenty")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

/// Known sums: stdout is exactly one line with the decimal total
#[test]
fn test_known_sums() {
    for (limit, expected) in [("0", "0\n"), ("1", "0\n"), ("2", "2\n"), ("10", "17\n"), ("20", "77\n")] {
        primesum()
            .arg(limit)
            .assert()
            .success()
            .stdout(predicate::eq(expected));
    }
}

/// Negative limits are degenerate, not errors
#[test]
fn test_negative_limit() {
    primesum()
        .arg("-5")
        .assert()
        .success()
        .stdout(predicate::eq("0\n"));
}

/// The sum is identical for worker counts of 1, 5, and 50
#[test]
fn test_worker_count_invariance() {
    let mut outputs = Vec::new();
    for workers in ["1", "5", "50"] {
        let assert = primesum().args(["--workers", workers, "1000"]).assert().success();
        outputs.push(assert.get_output().stdout.clone());
    }
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

/// JSON format emits the full report on one line
#[test]
fn test_json_format() {
    primesum()
        .args(["--format", "json", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sum\":17"))
        .stdout(predicate::str::contains("\"primes_found\":3"));
}

/// Unknown format is rejected by argument validation
#[test]
fn test_unknown_format() {
    primesum()
        .args(["--format", "xml", "10"])
        .assert()
        .failure()
        .code(1);
}

/// Quiet mode still prints the sum and nothing else
#[test]
fn test_quiet_mode() {
    primesum()
        .args(["--quiet", "20"])
        .assert()
        .success()
        .stdout(predicate::eq("77\n"));
}

/// Verbose mode keeps the sum first and appends a run summary
#[test]
fn test_verbose_mode() {
    primesum()
        .args(["--verbose", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("17\n"))
        .stdout(predicate::str::contains("primes found"));
}
