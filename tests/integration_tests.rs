use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn minimize_human_format() {
    let mut cmd = Command::cargo_bin("qm-minimizer").unwrap();
    cmd.args(["minimize", "--vars", "3", "--ones", "0,2,5,7"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Minimized expression (SOP)"));
}

#[test]
fn minimize_json_format() {
    let mut cmd = Command::cargo_bin("qm-minimizer").unwrap();
    cmd.args(["minimize", "--vars", "3", "--ones", "0,2,5,7", "--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("minimal_sop"));
}

#[test]
fn minimize_with_dont_cares_and_names() {
    let mut cmd = Command::cargo_bin("qm-minimizer").unwrap();
    cmd.args([
        "minimize",
        "--vars",
        "4",
        "--ones",
        "1,3,7,11,15",
        "--dont-cares",
        "0,2,5",
        "--names",
        "A,B,C,D",
        "--format",
        "table",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Minimized Expression"));
}

#[test]
fn minimize_steps_format() {
    let mut cmd = Command::cargo_bin("qm-minimizer").unwrap();
    cmd.args(["minimize", "--vars", "2", "--ones", "0,1,2,3", "--format", "steps"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Solution Steps"));
}

#[test]
fn minimize_from_input_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, r#"{{"variables": 2, "minterms": [0, 2]}}"#).unwrap();

    let mut cmd = Command::cargo_bin("qm-minimizer").unwrap();
    cmd.args(["minimize", "--input"]).arg(temp_file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Minimized expression (SOP)"));
}

#[test]
fn minimize_rejects_out_of_range_vars() {
    let mut cmd = Command::cargo_bin("qm-minimizer").unwrap();
    cmd.args(["minimize", "--vars", "20", "--ones", "0"]);

    cmd.assert().failure();
}

#[test]
fn minimize_requires_ones_without_input() {
    let mut cmd = Command::cargo_bin("qm-minimizer").unwrap();
    cmd.args(["minimize", "--vars", "3"]);

    cmd.assert().failure();
}

#[test]
fn minimize_pos_flag_prints_pos_form() {
    let mut cmd = Command::cargo_bin("qm-minimizer").unwrap();
    cmd.args(["minimize", "--vars", "2", "--ones", "0,1,2,3", "--pos"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Minimized expression (POS)"));
}
