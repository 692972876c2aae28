//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `matrix-cli` binary to verify that
//! argument parsing and a scripted session work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("matrix-cli").unwrap();
    cmd.env_remove("MATRIX_RESULTS_FILE");
    cmd
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--results-file"))
        .stdout(predicate::str::contains("--no-animation"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix-cli"));
}

#[test]
fn rejects_unknown_argument() {
    cmd()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn scripted_session_saves_result() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.txt");
    cmd()
        .arg("--results-file")
        .arg(&file)
        .args(["--no-animation", "--pause-ms", "0"])
        .write_stdin("1\n2\n2\n1 2\n3 4\n2\n2\n2\n5 6\n7 8\n6\nd\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A - B ="))
        .stdout(predicate::str::contains("   -4.00    -4.00 "))
        .stdout(predicate::str::ends_with("Izlaz.\n"));

    let saved = std::fs::read_to_string(&file).unwrap();
    assert!(saved.contains("Operacija: A - B"));
    assert!(saved.contains("Dimenzije: 2x2"));
}

#[test]
fn results_file_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("env.txt");
    cmd()
        .env("MATRIX_RESULTS_FILE", &file)
        .args(["--no-animation", "--pause-ms", "0"])
        .write_stdin("15\nd\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Svi sacuvani rezultati su obrisani."));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "");
}
