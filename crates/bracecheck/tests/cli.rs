//! End-to-end tests for the bracecheck binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn bracecheck() -> Command {
    Command::cargo_bin("bracecheck").unwrap()
}

fn source_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn missing_argument_is_a_usage_error() {
    bracecheck()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn nonexistent_file_fails() {
    bracecheck()
        .arg("no/such/file.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_utf8_input_fails() {
    let file = source_file(&[0xc3, 0x28, b'\n']);
    bracecheck()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn clean_file_produces_no_output() {
    let file = source_file(b"function add(a, b) {\n  return a + b;\n}\n");
    bracecheck()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn diagnostics_are_printed_and_exit_is_zero() {
    let file = source_file(b"}\nreturn 5\n");
    bracecheck().arg(file.path()).assert().success().stdout(
        "Extra closing brace at line 1: }\n\
         Illegal return statement at line 2: return 5\n",
    );
}

#[test]
fn verbose_writes_only_to_stderr() {
    let file = source_file(b"function f() {\n}\n");
    bracecheck()
        .arg("--verbose")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Scanning"));
}

#[test]
fn pretty_moves_rendering_off_stdout() {
    let file = source_file(b"}\n");
    bracecheck()
        .arg("--pretty")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("extra closing brace"));
}
