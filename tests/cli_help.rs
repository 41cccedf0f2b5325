use assert_cmd::Command;
use predicates::prelude::{PredicateBooleanExt, predicate};

#[test]
fn prints_help() {
    let mut cmd = Command::cargo_bin("git-dircompare").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("USAGE")));
}

#[test]
fn lists_every_trigger_subcommand() {
    let mut cmd = Command::cargo_bin("git-dircompare").unwrap();
    let mut assert = cmd.arg("--help").assert().success();
    for subcommand in ["open", "head", "results", "working"] {
        assert = assert.stdout(predicate::str::contains(subcommand));
    }
    drop(assert);
}
