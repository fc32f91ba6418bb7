//! End-to-end CLI tests: sample -> analyze -> report.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[allow(deprecated)]
fn readygate_cmd() -> Command {
    Command::cargo_bin("readygate").unwrap()
}

fn store_arg(dir: &tempfile::TempDir) -> String {
    dir.path().join("reports.json").display().to_string()
}

fn analyze_sample(dir: &tempfile::TempDir) -> Value {
    let sample = readygate_cmd().arg("sample").assert().success();
    let sample_json = String::from_utf8(sample.get_output().stdout.clone()).expect("utf8");

    let analyze = readygate_cmd()
        .args(["--store", &store_arg(dir)])
        .args(["analyze", "--label", "demo", "--metadata", "-", "--json"])
        .write_stdin(sample_json)
        .assert()
        .success();
    let stdout = String::from_utf8(analyze.get_output().stdout.clone()).expect("utf8");
    serde_json::from_str(&stdout).expect("analyze JSON output")
}

#[test]
fn sample_prints_valid_metadata_json() {
    let assert = readygate_cmd().arg("sample").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let value: Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["tables"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["authRules"].as_array().map(Vec::len), Some(5));
}

#[test]
fn analyzing_the_sample_scores_20_with_6_high_and_5_medium() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = analyze_sample(&dir);

    assert_eq!(result["score"], 20);
    assert_eq!(result["summary"]["high"], 6);
    assert_eq!(result["summary"]["medium"], 5);
    assert_eq!(result["summary"]["low"], 0);
}

#[test]
fn stored_report_can_be_read_back_as_json_and_markdown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = analyze_sample(&dir);
    let slug = result["slug"].as_str().expect("slug");

    let json_out = readygate_cmd()
        .args(["--store", &store_arg(&dir)])
        .args(["report", slug, "--format", "json"])
        .assert()
        .success();
    let report: Value =
        serde_json::from_slice(&json_out.get_output().stdout).expect("report JSON");
    assert_eq!(report["slug"], slug);
    assert_eq!(report["readinessScore"], 20);
    assert_eq!(report["sourceMode"], "manual");
    assert_eq!(report["findings"].as_array().map(Vec::len), Some(11));
    assert!(
        report["rawMetadata"].is_object(),
        "manual analyses keep the pasted metadata"
    );

    readygate_cmd()
        .args(["--store", &store_arg(&dir)])
        .args(["report", slug])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: **20/100**"))
        .stdout(predicate::str::is_match(r"- Created: \d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").unwrap())
        .stdout(predicate::str::contains("6 high / 5 medium / 0 low"));
}

#[test]
fn unknown_slug_reports_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    readygate_cmd()
        .args(["--store", &store_arg(&dir)])
        .args(["report", "zzzzzz"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("report not found: zzzzzz"));
}

#[test]
fn analyze_requires_a_metadata_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    readygate_cmd()
        .args(["--store", &store_arg(&dir)])
        .args(["analyze", "--label", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--metadata"));
}

#[test]
fn analyze_rejects_invalid_metadata_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    readygate_cmd()
        .args(["--store", &store_arg(&dir)])
        .args(["analyze", "--label", "demo", "--metadata", "-"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse metadata JSON"));
}

#[test]
fn clean_metadata_scores_100() {
    let dir = tempfile::tempdir().expect("tempdir");
    let analyze = readygate_cmd()
        .args(["--store", &store_arg(&dir)])
        .args(["analyze", "--label", "clean", "--metadata", "-", "--json"])
        .write_stdin(r#"{"tables": [], "authRules": [], "functions": []}"#)
        .assert()
        .success();

    let result: Value =
        serde_json::from_slice(&analyze.get_output().stdout).expect("analyze JSON");
    assert_eq!(result["score"], 100);
}

#[test]
fn explain_known_and_unknown_check_ids() {
    readygate_cmd()
        .args(["explain", "schema.missing_primary_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation"));

    readygate_cmd()
        .args(["explain", "schema.bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown check id"));
}
