use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn rounds_output_right_answer_for_single_card() {
    let mut cmd = Command::cargo_bin("rounds").unwrap();
    cmd.arg("1");

    cmd.assert()
        .success()
        .stdout(str::contains("rounds for 1 numbers = 1"));
}

#[test]
fn rounds_output_right_answer_for_two_cards() {
    let mut cmd = Command::cargo_bin("rounds").unwrap();
    cmd.arg("2");

    cmd.assert()
        .success()
        .stdout(str::contains("rounds for 2 numbers = 2"));
}

#[test]
fn rounds_output_right_answer_for_worked_example() {
    let mut cmd = Command::cargo_bin("rounds").unwrap();
    cmd.arg("12");

    cmd.assert()
        .success()
        .stdout(str::contains("rounds for 12 numbers = 12"));
}

#[test]
fn rounds_output_right_answer_for_full_deck() {
    let mut cmd = Command::cargo_bin("rounds").unwrap();
    cmd.arg("52");

    cmd.assert()
        .success()
        .stdout(str::contains("rounds for 52 numbers = 510"));
}

#[test]
fn rounds_output_right_answer_for_interview_deck() {
    let mut cmd = Command::cargo_bin("rounds").unwrap();
    cmd.arg("313");

    cmd.assert()
        .success()
        .stdout(str::contains("rounds for 313 numbers = 1575169365"));
}

#[test]
fn rounds_reject_empty_deck() {
    let mut cmd = Command::cargo_bin("rounds").unwrap();
    cmd.arg("0");

    cmd.assert().failure();
}

#[test]
fn rounds_reject_negative_deck_size() {
    let mut cmd = Command::cargo_bin("rounds").unwrap();
    cmd.arg("-3");

    cmd.assert().failure();
}

#[test]
fn rounds_reject_non_numeric_deck_size() {
    let mut cmd = Command::cargo_bin("rounds").unwrap();
    cmd.arg("a deck of cards");

    cmd.assert().failure();
}
