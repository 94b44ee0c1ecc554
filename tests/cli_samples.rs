//! CLI tests — run the `numeral-svg` binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;

fn numeral_svg() -> Command {
    Command::cargo_bin("numeral-svg").expect("numeral-svg binary should build")
}

#[test]
fn default_value_per_system() {
    numeral_svg()
        .arg("cistercian")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cistercian numeral for 1234"));

    numeral_svg()
        .arg("basingstoke")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basingstoke centesimal for 42"));
}

#[test]
fn explicit_value() {
    numeral_svg()
        .args(["cistercian", "9999"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg").and(predicate::str::contains("for 9999")));
}

#[test]
fn text_prints_one_svg_per_chunk() {
    let output = numeral_svg()
        .args(["basingstoke", "--text", "1 2 3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("<svg").count(), 3);

    numeral_svg()
        .args(["cistercian", "--text", "no digits"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn out_of_range_value_fails() {
    numeral_svg()
        .args(["basingstoke", "100"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must be in 0..=99"));

    numeral_svg()
        .args(["cistercian", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be in 0..=9999"));
}

#[test]
fn unknown_system_is_rejected() {
    numeral_svg()
        .args(["roman", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown numeral system 'roman'"));
}
