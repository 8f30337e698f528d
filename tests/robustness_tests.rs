use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;

#[test]
fn test_malformed_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("robustness.csv");
    common::write_requests(
        &input,
        &[
            // Valid
            ["500", "300", "poland"],
            // Unknown market
            ["500", "300", "asia"],
            // Missing distance
            ["500", "", "poland"],
            // Text in price field
            ["not_a_number", "300", "poland"],
            // Valid again
            ["200", "0", "western-europe"],
        ],
    )
    .unwrap();

    let mut cmd = common::calculator();
    cmd.arg("batch").arg(&input);

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping row: malformed request"))
        .stdout(predicate::str::contains("poland,300,2400,"))
        .stdout(predicate::str::contains("western-europe,0,0,"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // Header plus the two valid rows.
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_out_of_range_row_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("huge.csv");
    common::write_requests(
        &input,
        &[
            ["40000000000000000000000000000", "300", "poland"],
            ["500", "300", "poland"],
        ],
    )
    .unwrap();

    let mut cmd = common::calculator();
    cmd.arg("batch").arg(&input);

    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping row"))
        .stdout(predicate::str::contains("poland,300,2400,$1.25,"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_missing_input_file() {
    let mut cmd = common::calculator();
    cmd.arg("batch").arg("no_such_requests.csv");

    cmd.assert().failure();
}

#[test]
fn test_empty_batch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    common::write_requests(&input, &[]).unwrap();

    let mut cmd = common::calculator();
    cmd.arg("batch").arg(&input);

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_config_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[rates\npln = 4.25").unwrap();

    let mut cmd = common::calculator();
    cmd.arg("--config")
        .arg(&config)
        .args(["quote", "--price", "1", "--distance", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_non_positive_rate_baseline_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("rates.toml");
    std::fs::write(&config, "[rates]\npln = \"0\"\n").unwrap();

    let mut cmd = common::calculator();
    cmd.arg("--config")
        .arg(&config)
        .args(["quote", "--price", "1", "--distance", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exchange rates must be positive"));
}
