#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "ogtt_2h,apob,vo2max,crp,bmi,packyrs,moca,mvpa,cac,hrv,phq9,alt,egfr,bmd_t,truage_delta,small_hdl,rem_pct,grip,swls,rpdqs";
const TYPICAL: &str =
    "152,107,34,2,29.6,0,25,112.5,98,47,7,42,82,-1.2,2,10.2,12.380952380952381,38,26,35";

/// Runs lq inside an isolated working directory and home so no stray config is picked up.
fn lq_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lq").expect("binary should compile");
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn lq_value(json: &str) -> f64 {
    let parsed: serde_json::Value = serde_json::from_str(json).expect("stdout should be json");
    parsed["LQ"].as_f64().expect("LQ should be a number")
}

#[test]
fn score_typical_preset_as_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = lq_in(&dir)
        .args(["score", "--preset", "typical", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"N_ogtt_2h\""))
        .stdout(predicate::str::contains("\"cac_method\": \"logarithmic\""))
        .get_output()
        .stdout
        .clone();

    let lq = lq_value(&String::from_utf8(output).expect("stdout should be utf-8"));
    assert!((lq - 488.519_136_974_327_35).abs() < 1e-9, "got {lq}");
}

#[test]
fn score_markdown_is_the_default_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    lq_in(&dir)
        .args(["score", "--preset", "high-performer"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Longevity Quotient Report"))
        .stdout(predicate::str::contains("LQ: 791.80"));
}

#[test]
fn score_reads_toml_input_file_with_helpers() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("patient.toml"),
        r#"
ogtt_2h = 152
apob = 107
vo2max = 34
crp = 2
bmi = 29.6
packyrs = 0
moca = 25
oura_high = 100
oura_medium = 25
cac = 98
hrv = 47
phq9 = 7
alt = 42
egfr = 82
bmd_t = -1.2
truage_delta = 2
small_hdl = 10.2
rem_minutes = 52
total_sleep_minutes = 420
grip = 38
swls = 26
rpdqs = 35
"#,
    )
    .expect("input should write");

    let output = lq_in(&dir)
        .args(["score", "--input", "patient.toml", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"mvpa\": 112.5"))
        .get_output()
        .stdout
        .clone();

    let lq = lq_value(&String::from_utf8(output).expect("stdout should be utf-8"));
    assert!((lq - 488.519_136_974_327_35).abs() < 1e-9, "got {lq}");
}

#[test]
fn score_with_missing_field_fails_at_runtime() {
    let dir = TempDir::new().expect("temp dir should be created");
    lq_in(&dir)
        .args(["score", "--set", "apob=90"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing field: ogtt_2h"));
}

#[test]
fn score_rejects_negative_cac() {
    let dir = TempDir::new().expect("temp dir should be created");
    lq_in(&dir)
        .args(["score", "--preset", "typical", "--set", "cac=-5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn score_rejects_unknown_override() {
    let dir = TempDir::new().expect("temp dir should be created");
    lq_in(&dir)
        .args(["score", "--preset", "typical", "--set", "ldl=120"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown variable: ldl"));
}

#[test]
fn config_selects_piecewise_method() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("lq.toml"),
        r#"
[scoring]
cac_method = "piecewise"

[output]
format = "json"
"#,
    )
    .expect("config should write");

    lq_in(&dir)
        .args(["score", "--preset", "typical"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"cac_method\": \"piecewise\""))
        .stdout(predicate::str::contains("\"N_cac\": 80.4"));
}

#[test]
fn config_with_invalid_method_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("lq.toml"),
        "[scoring]\ncac_method = \"spline\"\n",
    )
    .expect("config should write");

    lq_in(&dir)
        .args(["score", "--preset", "typical"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid CAC method: spline"));
}

#[test]
fn batch_scores_all_rows_and_writes_default_output() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("cohort.csv"),
        format!("subject,{HEADER}\nalice,{TYPICAL}\nbob,{TYPICAL}\n"),
    )
    .expect("input should write");

    lq_in(&dir)
        .args(["batch", "cohort.csv"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("batch: 2 rows, 2 scored, 0 failed"));

    let written =
        fs::read_to_string(dir.path().join("cohort.lq.csv")).expect("output should be written");
    let lines = written.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("N_rpdqs,composite,LQ,error"));
    assert!(lines[1].starts_with("alice,152,"));
    assert!(lines[2].starts_with("bob,152,"));
}

#[test]
fn batch_reports_partial_success_with_warning_exit() {
    let dir = TempDir::new().expect("temp dir should be created");
    let broken = TYPICAL.replacen("98", "-1", 1);
    fs::write(
        dir.path().join("cohort.csv"),
        format!("subject,{HEADER}\nalice,{TYPICAL}\ncarol,{broken}\n"),
    )
    .expect("input should write");

    lq_in(&dir)
        .args([
            "batch",
            "cohort.csv",
            "--output",
            "scored.csv",
            "--sequential",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 scored, 1 failed"));

    let written =
        fs::read_to_string(dir.path().join("scored.csv")).expect("output should be written");
    let lines = written.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("alice,"));
    assert!(lines[2].starts_with("carol,"));
    assert!(lines[2].contains("invalid input"));
}

#[test]
fn batch_isolates_rows_that_are_not_utf8() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut input = format!("subject,{HEADER}\nalice,{TYPICAL}\n").into_bytes();
    input.extend_from_slice(b"Jos\xe9,");
    input.extend_from_slice(TYPICAL.as_bytes());
    input.extend_from_slice(b"\nbob,15\xe92");
    input.extend_from_slice(&TYPICAL.as_bytes()[3..]);
    input.push(b'\n');
    fs::write(dir.path().join("cohort.csv"), input).expect("input should write");

    lq_in(&dir)
        .args(["batch", "cohort.csv"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("batch: 3 rows, 2 scored, 1 failed"));

    let written =
        fs::read_to_string(dir.path().join("cohort.lq.csv")).expect("output should be written");
    let lines = written.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("alice,152,"));
    assert!(lines[1].ends_with(','), "alice should score");
    assert!(lines[2].starts_with("Jos\u{fffd},152,"));
    assert!(lines[2].ends_with(','), "undecodable subject name should still score");
    assert!(lines[3].starts_with("bob,"));
    assert!(lines[3].ends_with("ogtt_2h: cell is not valid UTF-8"));
}

#[test]
fn batch_missing_input_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    lq_in(&dir)
        .args(["batch", "absent.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
