//! Tests for the `lox` binary: argument handling, exit codes and the
//! split between program output and diagnostics.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn runs_script_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;

    cmd.arg("tests/scripts/arithmetic.lox");
    cmd.assert()
        .success()
        .stdout("3\nab\n9\ntrue\nfalse\n");

    Ok(())
}

#[test]
fn reads_standard_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;

    cmd.write_stdin("1 + 2");
    cmd.assert().success().stdout("3\n");

    Ok(())
}

#[test]
fn runtime_error_exits_non_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;

    cmd.arg("tests/scripts/runtime_error.lox");
    cmd.assert()
        .code(70)
        .stdout("before\n")
        .stderr(predicate::str::contains("RuntimeError"))
        .stderr(predicate::str::contains("2 | print 1 + \"a\";"));

    Ok(())
}

#[test]
fn parse_error_exits_non_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;

    cmd.arg("tests/scripts/parse_error.lox");
    cmd.assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("expect ')' after expression."));

    Ok(())
}

#[test]
fn lex_error_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;

    cmd.write_stdin("print 1 @ 2;");
    cmd.assert()
        .code(65)
        .stderr(predicate::str::contains("LexError"))
        .stderr(predicate::str::contains("-> stdin"));

    Ok(())
}

#[test]
fn too_many_arguments_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;

    cmd.args(["one.lox", "two.lox"]);
    cmd.assert()
        .code(64)
        .stderr(predicate::str::contains("Usage: lox [script]"));

    Ok(())
}

#[test]
fn missing_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;

    cmd.arg("tests/scripts/does_not_exist.lox");
    cmd.assert()
        .code(66)
        .stderr(predicate::str::contains("Failed to read file"));

    Ok(())
}

#[test]
fn timings_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lox")?;

    cmd.env("LOX_TIMINGS", "1").env("LOX_DUMP_TOKENS", "true");
    cmd.write_stdin("!nil");
    cmd.assert()
        .success()
        .stdout("true\n")
        .stderr(predicate::str::contains("Tokenized in"))
        .stderr(predicate::str::contains("[1] Not ()"));

    Ok(())
}
