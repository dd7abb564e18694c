//! End-to-end tests for the pair-finder binary

use assert_cmd::Command;
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pair_finder(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("pair-finder");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_stdin_without_subcommand() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .write_stdin("4\n2 7 11 15\n9\n")
        .assert()
        .success()
        .stdout("0 1\n");
}

#[test]
fn test_solve_examples() {
    let temp_dir = TempDir::new().unwrap();
    for (input, expected) in [("3\n3 2 4\n6\n", "1 2\n"), ("2\n3 3\n6\n", "0 1\n")] {
        pair_finder(&temp_dir)
            .arg("solve")
            .write_stdin(input)
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_no_pair_is_silent_by_default() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .write_stdin("3\n1 2 3\n100\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_empty_sequence() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .write_stdin("0\n7\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_sentinel_flag() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .args(["solve", "--sentinel", "-1 -1"])
        .write_stdin("3 1 2 3 100")
        .assert()
        .success()
        .stdout("-1 -1\n");
}

#[test]
fn test_json_format() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .args(["solve", "--format", "json"])
        .write_stdin("4 2 7 11 15 9")
        .assert()
        .success()
        .stdout("{\"first\":0,\"second\":1}\n");
}

#[test]
fn test_input_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("problem.txt"), "3 3 2 4 6").unwrap();
    pair_finder(&temp_dir)
        .args(["solve", "--input", "problem.txt"])
        .assert()
        .success()
        .stdout("1 2\n");
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .args(["solve", "--input", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_malformed_input_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .write_stdin("3 1 two 3 4")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid token 'two'"));
}

#[test]
fn test_truncated_input_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .write_stdin("5 1 2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected end of input"));
}

#[test]
fn test_discovered_config_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".pair-finder.json"),
        r#"{"sentinel": "NOT FOUND"}"#,
    )
    .unwrap();

    pair_finder(&temp_dir)
        .write_stdin("2 1 1 5")
        .assert()
        .success()
        .stdout("NOT FOUND\n");
}

#[test]
fn test_empty_config_sentinel_stays_silent() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".pair-finder.json"), r#"{"sentinel": ""}"#).unwrap();

    pair_finder(&temp_dir)
        .write_stdin("2 1 1 5")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("custom.json"),
        r#"{"format": "json", "sentinel": "x"}"#,
    )
    .unwrap();

    pair_finder(&temp_dir)
        .args(["--config", "custom.json", "solve", "--format", "text"])
        .write_stdin("2 1 1 5")
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".pair-finder.json"), "{ broken").unwrap();

    pair_finder(&temp_dir)
        .write_stdin("2 3 3 6")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

fn write_case(dir: &std::path::Path, name: &str, input: &str, expected: &str) {
    fs::write(dir.join(format!("{name}.in")), input).unwrap();
    fs::write(dir.join(format!("{name}.out")), expected).unwrap();
}

#[test]
fn test_judge_all_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let cases = temp_dir.path().join("tests");
    fs::create_dir(&cases).unwrap();
    write_case(&cases, "case1", "4\n2 7 11 15\n9\n", "0 1\n");
    write_case(&cases, "case2", "3\n1 2 3\n100\n", "");

    pair_finder(&temp_dir)
        .arg("judge")
        .assert()
        .success()
        .stdout("case1: ACCEPTED\ncase2: ACCEPTED\n2/2 accepted\n");
}

#[test]
fn test_judge_wrong_answer_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_case(temp_dir.path(), "case1", "3\n3 2 4\n6\n", "0 2\n");

    pair_finder(&temp_dir)
        .args(["judge", "."])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "case1: WA: Expected '0 2', but got '1 2'",
        ))
        .stderr(predicate::str::contains("1 of 1 cases not accepted"));
}

#[test]
fn test_judge_json_report() {
    let temp_dir = TempDir::new().unwrap();
    write_case(temp_dir.path(), "case1", "2 3 3 6", "0 1");

    let output = pair_finder(&temp_dir)
        .args(["judge", ".", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["results"][0]["name"], "case1");
    assert_eq!(report["results"][0]["verdict"], "accepted");
}

#[test]
fn test_judge_missing_dir() {
    let temp_dir = TempDir::new().unwrap();
    pair_finder(&temp_dir)
        .args(["judge", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to judge cases in missing"));
}
