#![cfg(all(feature = "cli", not(feature = "tracing")))]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn testdata_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

#[test]
fn prints_report_to_stdout() {
    Command::cargo_bin("arrowtrack")
        .expect("binary")
        .arg(testdata_path("jitter_replay.json"))
        .args(["--log-level", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"stable\""))
        .stdout(predicate::str::contains("\"tip\""));
}

#[test]
fn writes_report_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested").join("report.json");

    Command::cargo_bin("arrowtrack")
        .expect("binary")
        .arg(testdata_path("jitter_replay.json"))
        .arg("--output")
        .arg(&out)
        .args(["--log-level", "warn"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&out).expect("report written");
    let report: serde_json::Value = serde_json::from_str(&raw).expect("report json");
    let frames = report["frames"].as_array().expect("frames array");
    assert_eq!(frames.len(), 6);
    assert_eq!(frames[3]["stable"][0]["tip"], serde_json::json!([140, 120]));
}

#[test]
fn missing_input_fails() {
    Command::cargo_bin("arrowtrack")
        .expect("binary")
        .arg("does-not-exist.json")
        .args(["--log-level", "off"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}
