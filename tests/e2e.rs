//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibonacci() -> Command {
    let mut cmd = Command::cargo_bin("fibonacci").expect("binary not found");
    cmd.env_remove("FIBONACCI_MAX_INDEX")
        .env_remove("FIBONACCI_MAX_SEQUENCE");
    cmd
}

#[test]
fn help_flag() {
    fibonacci()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn value_memoized() {
    fibonacci()
        .args(["value", "10"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn value_fast_at_boundary() {
    fibonacci()
        .args(["value", "93", "--strategy", "fast"])
        .assert()
        .success()
        .stdout("12200160415121876738\n");
}

#[test]
fn sequence_json() {
    fibonacci()
        .args(["sequence", "5", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""sequence":[0,1,1,2,3]"#));
}

#[test]
fn info_plain() {
    fibonacci()
        .args(["info", "20"])
        .assert()
        .success()
        .stdout("F(20) = 6765 (odd, 4 digits)\n");
}

#[test]
fn compare_reports_agreement() {
    fibonacci()
        .args(["compare", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agree:    true"));
}

#[test]
fn negative_index_fails() {
    fibonacci()
        .args(["value", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("n must be a non-negative integer"));
}

#[test]
fn sequence_limit_from_env() {
    fibonacci()
        .env("FIBONACCI_MAX_SEQUENCE", "10")
        .args(["sequence", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("n is too large (max 10)"));
}

#[test]
fn index_limit_flag() {
    fibonacci()
        .args(["info", "10001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("n is too large (max 10000)"));
}
