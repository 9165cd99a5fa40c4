//! End-to-end tests for the svx binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    std::fs::write(file.path(), content).expect("write fixture");
    file
}

fn svx() -> Command {
    Command::cargo_bin("svx").expect("binary builds")
}

#[test]
fn lint_clean_file_exits_zero() {
    let file = write_temp("module top;\nwire x;\nendmodule\n");
    svx()
        .arg("lint")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn lint_flags_undersized_binary_literal() {
    let file = write_temp("wire x = 32'b01;\n");
    svx()
        .arg("lint")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Binary literal 32'b01"))
        .stdout(predicate::str::contains("[undersized-binary-literal]"));
}

#[test]
fn lint_json_report_names_the_rule() {
    let file = write_temp("wire x = 32'b01;\n");
    svx()
        .arg("lint")
        .arg("--json")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"rule\""))
        .stdout(predicate::str::contains("undersized-binary-literal"));
}

#[test]
fn lint_rules_override_selects_rules() {
    let file = write_temp("wire x = 32'b01;   \n");
    // Only the trailing-spaces rule runs; the literal is not reported.
    svx()
        .arg("lint")
        .arg("--rules")
        .arg("no-trailing-spaces")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no-trailing-spaces"))
        .stdout(predicate::str::contains("undersized-binary-literal").not());
}

#[test]
fn lint_autofix_rewrites_the_file() {
    let file = write_temp("wire x;   \n");
    svx()
        .arg("lint")
        .arg("--rules")
        .arg("no-trailing-spaces")
        .arg("--autofix")
        .arg(file.path())
        .assert()
        .code(1);
    let fixed = std::fs::read_to_string(file.path()).expect("read back");
    assert_eq!(fixed, "wire x;\n");
}

#[test]
fn lint_unreadable_file_is_an_internal_error() {
    svx()
        .arg("lint")
        .arg("definitely-not-a-file.sv")
        .assert()
        .code(2);
}

#[test]
fn format_strips_trailing_whitespace_to_stdout() {
    let file = write_temp("module top;  \nwire  a;\nendmodule\n");
    svx()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout("module top;\nwire  a;\nendmodule\n");
}

#[test]
fn format_inplace_rewrites_the_file() {
    let file = write_temp("wire a;  \n\n\n\nwire b;\n");
    svx()
        .arg("format")
        .arg("--inplace")
        .arg(file.path())
        .assert()
        .success();
    let formatted = std::fs::read_to_string(file.path()).expect("read back");
    assert_eq!(formatted, "wire a;\n\nwire b;\n");
}
