use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn walk_output_right_answer() {
    let mut cmd = Command::cargo_bin("walk").unwrap();
    cmd.arg("inputs/basic.txt");
    cmd.assert().success().stdout(
        predicate::str::contains("Letters: ACB")
            .and(predicate::str::contains("Path: @---A---+|C|+---+|+-B-x")),
    );
}

#[test]
fn walk_output_revisited_letters_once() {
    let mut cmd = Command::cargo_bin("walk").unwrap();
    cmd.arg("inputs/goonies.txt");
    cmd.assert().success().stdout(
        predicate::str::contains("Letters: GOONIES")
            .and(predicate::str::contains("Path: @-G-O-+|+-+|O||+-O-N-+|I|+-+|+-I-+|ES|x")),
    );
}

#[test]
fn walk_reports_forked_turn() {
    let mut cmd = Command::cargo_bin("walk").unwrap();
    cmd.arg("inputs/fork.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "The map must have only one valid direction.",
        ));
}

#[test]
fn walk_reports_missing_start() {
    let mut cmd = Command::cargo_bin("walk").unwrap();
    cmd.arg("inputs/no_start.txt");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "The map must contain exactly one start '@' and one end 'x'.",
        ));
}

#[test]
fn walk_reports_missing_file() {
    let mut cmd = Command::cargo_bin("walk").unwrap();
    cmd.arg("inputs/does_not_exist.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open given file"));
}
