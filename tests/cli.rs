//! CLI behavior tests: exit codes, output formats, file generation.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const SAMPLE: &str = r#"{
    "trust_score": 82,
    "source": "Daily Planet",
    "author": "Lois Lane",
    "word_count": 1250,
    "article_summary": "A detailed report on municipal water quality testing.",
    "detailed_analysis": {
        "source_credibility": {"score": 85},
        "fact_checker": {
            "score": 90,
            "claims": [
                {"claim": "Lead levels doubled since 2020", "verdict": "true"},
                {"claim": "No federal limits exist", "verdict": "false"}
            ]
        }
    }
}"#;

fn truthlens_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_truthlens"))
}

fn sample_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("analysis.json");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn no_args_returns_error_not_panic() {
    let mut cmd = truthlens_cmd();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("INPUT").or(predicate::str::contains("input")));
}

#[test]
fn file_not_found_exit_2() {
    let mut cmd = truthlens_cmd();
    cmd.arg("nonexistent.json");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("failed to read").or(predicate::str::contains("nonexistent")));
}

#[test]
fn invalid_json_exit_2() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "this is not json").unwrap();
    let mut cmd = truthlens_cmd();
    cmd.arg(&path);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn console_report_shows_scores() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = truthlens_cmd();
    cmd.arg(sample_file(&dir)).arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Daily Planet"))
        .stdout(predicate::str::contains("Highly Credible"))
        .stdout(predicate::str::contains("Fact Check"));
}

#[test]
fn quiet_mode_is_one_line() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = truthlens_cmd();
    cmd.arg(sample_file(&dir)).arg("--quiet").arg("--no-color");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 1);
    assert!(stdout.contains("82"));
}

#[test]
fn json_output_valid() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = truthlens_cmd();
    cmd.arg(sample_file(&dir)).arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert_eq!(parsed["trust_score"], 82.0);
    assert!(parsed.get("services").is_some());
}

#[test]
fn stdin_input_with_dash() {
    let mut cmd = truthlens_cmd();
    cmd.arg("-").arg("--quiet").write_stdin(SAMPLE);
    cmd.assert().success().stdout(predicate::str::contains("82"));
}

#[test]
fn html_flag_writes_dashboard() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = sample_file(&dir);
    let out = dir.path().join("report.html");
    let mut cmd = truthlens_cmd();
    cmd.arg(&input).arg("--html").arg(&out);
    cmd.assert().success();
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("TruthLens"));
    assert!(html.contains("Daily Planet"));
}

#[test]
fn pdf_flag_writes_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = sample_file(&dir);
    let out = dir.path().join("report.pdf");
    let mut cmd = truthlens_cmd();
    cmd.arg(&input).arg("--pdf").arg(&out);
    cmd.assert().success();
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn failed_pdf_leaves_no_partial_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = sample_file(&dir);
    let out = dir.path().join("no-such-dir").join("report.pdf");
    let mut cmd = truthlens_cmd();
    cmd.arg(&input).arg("--pdf").arg(&out);
    cmd.assert().failure().code(2);
    assert!(!out.exists());
}

#[test]
fn html_and_pdf_together() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = sample_file(&dir);
    let html_out = dir.path().join("r.html");
    let pdf_out = dir.path().join("r.pdf");
    let mut cmd = truthlens_cmd();
    cmd.arg(&input)
        .arg("--html")
        .arg(&html_out)
        .arg("--pdf")
        .arg(&pdf_out);
    cmd.assert().success();
    assert!(html_out.exists());
    assert!(pdf_out.exists());
}
