use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn langcat() -> Command {
    Command::cargo_bin("langcat").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    langcat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("chart"))
        .stdout(predicate::str::contains("--data"));
}

#[test]
fn test_chart_help_mentions_width() {
    langcat()
        .args(["chart", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--width"));
}

#[test]
fn test_rejects_unknown_format() {
    langcat()
        .args(["--format", "xml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}
