use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn program_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn run_subcommand_prints_the_report_table() {
    let file = program_file("ADD.D F2 F0 F4\n");
    Command::cargo_bin("tomasulo_sim")
        .unwrap()
        .arg("run")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Instruction"))
        .stdout(predicate::str::contains("ADD.D F2, F0, F4"));
}

#[test]
fn max_subcommand_prints_the_terminal_cycle() {
    let file = program_file("ADD.D F2 F0 F4\n");
    Command::cargo_bin("tomasulo_sim")
        .unwrap()
        .arg("max")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("5\n"));
}

#[test]
fn run_subcommand_rejects_a_malformed_program() {
    let file = program_file("BROKEN\n");
    Command::cargo_bin("tomasulo_sim")
        .unwrap()
        .arg("run")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed instruction input"));
}
