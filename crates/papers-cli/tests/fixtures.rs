//! End-to-end CLI tests over the datasets in `tests/fixtures/`.
//!
//! Each fixture directory holds a `travelers.json` and may override the shared
//! `watchlist.json`, `countries.json`, or `papers.toml` from `tests/fixtures/shared/`.
//! Expectations live next to the inputs:
//! - `expected.decisions.json`: the decision list printed to stdout
//! - `expected.report.json` (optional): the full report, with nondeterministic fields
//!   normalized by `papers_test_util::normalize_nondeterministic`

use assert_cmd::Command;
use papers_test_util::normalize_nondeterministic;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn papers_cmd() -> Command {
    Command::cargo_bin("papers").expect("papers binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("papers-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// The fixture's own copy of `file`, or the shared one.
fn fixture_file(fixture: &str, file: &str) -> PathBuf {
    let own = fixtures_dir().join(fixture).join(file);
    if own.exists() {
        own
    } else {
        fixtures_dir().join("shared").join(file)
    }
}

fn decide_cmd(fixture: &str, report_path: &Path) -> Command {
    let mut cmd = papers_cmd();
    cmd.arg("--config")
        .arg(fixture_file(fixture, "papers.toml"))
        .arg("decide")
        .arg("--travelers")
        .arg(fixture_file(fixture, "travelers.json"))
        .arg("--watchlist")
        .arg(fixture_file(fixture, "watchlist.json"))
        .arg("--countries")
        .arg(fixture_file(fixture, "countries.json"))
        .arg("--report-out")
        .arg(report_path);
    cmd
}

struct DecideRun {
    exit_code: i32,
    stdout: String,
    report: Value,
}

fn run_decide_on_fixture(fixture: &str) -> DecideRun {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = decide_cmd(fixture, &report_path)
        .output()
        .expect("run papers decide");

    let report_text = std::fs::read_to_string(&report_path).expect("read report");
    DecideRun {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8(output.stdout).expect("utf8 stdout"),
        report: serde_json::from_str(&report_text).expect("parse report JSON"),
    }
}

fn load_json(fixture: &str, file: &str) -> Value {
    let path = fixtures_dir().join(fixture).join(file);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    serde_json::from_str(&text).expect("parse expected JSON")
}

/// Decide a fixture and check stdout and the report's decision list against
/// `expected.decisions.json`.
fn assert_fixture_decisions(fixture: &str) -> DecideRun {
    let run = run_decide_on_fixture(fixture);
    let expected = load_json(fixture, "expected.decisions.json");

    assert_eq!(run.exit_code, 0, "fixture '{fixture}' should exit with 0");

    let printed: Value = serde_json::from_str(run.stdout.trim()).expect("stdout is JSON");
    assert_eq!(printed, expected, "stdout decisions for '{fixture}'");
    assert_eq!(run.report["decisions"], expected, "report decisions for '{fixture}'");

    let decisions = expected.as_array().expect("decisions array");
    let determinations = run.report["determinations"]
        .as_array()
        .expect("determinations array");
    assert_eq!(determinations.len(), decisions.len());
    for (idx, (det, decision)) in determinations.iter().zip(decisions).enumerate() {
        assert_eq!(det["index"], idx);
        assert_eq!(&det["decision"], decision);
    }

    run
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_returning_resident_matches_golden_report() {
    let run = assert_fixture_decisions("returning_resident");
    let expected = load_json("returning_resident", "expected.report.json");

    let actual = normalize_nondeterministic(run.report);
    let expected = normalize_nondeterministic(expected);
    assert_eq!(
        actual,
        expected,
        "Report mismatch.\n\nActual:\n{}\n\nExpected:\n{}",
        serde_json::to_string_pretty(&actual).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap()
    );
}

#[test]
fn fixture_missing_fields_rejects_everyone() {
    let run = assert_fixture_decisions("missing_fields");

    let codes: Vec<&str> = run.report["determinations"]
        .as_array()
        .expect("determinations")
        .iter()
        .map(|d| d["code"].as_str().expect("code"))
        .collect();
    assert!(codes.iter().all(|c| *c == "missing_field"), "{codes:?}");

    // A traveler with no passport carries no reference.
    assert!(run.report["determinations"][0].get("traveler_ref").is_none());
}

#[test]
fn fixture_medical_advisory_quarantines_before_watchlist() {
    let run = assert_fixture_decisions("medical_advisory");
    let dets = &run.report["determinations"];
    assert_eq!(dets[0]["code"], "origin_advisory");
    assert_eq!(dets[1]["code"], "transit_advisory");
    assert_eq!(run.report["summary"]["quarantine"], 2);
}

#[test]
fn fixture_watchlist_sends_matches_to_secondary() {
    let run = assert_fixture_decisions("watchlist");
    let dets = &run.report["determinations"];
    assert_eq!(dets[0]["code"], "passport_match");
    assert_eq!(dets[1]["code"], "name_match");
    assert_eq!(dets[1]["data"]["watchlist_entry"], 1);
}

#[test]
fn fixture_visas() {
    let run = assert_fixture_decisions("visas");
    let codes: Vec<&str> = run.report["determinations"]
        .as_array()
        .expect("determinations")
        .iter()
        .map(|d| d["code"].as_str().expect("code"))
        .collect();
    assert_eq!(
        codes,
        [
            "visa_valid",
            "visa_expired",
            "visa_missing",
            "visa_malformed_date",
            "visa_not_required",
            "visa_missing",
            "visa_not_required",
        ]
    );
}

#[test]
fn fixture_legacy_profile_clears_unknown_countries() {
    let run = assert_fixture_decisions("legacy_profile");
    assert_eq!(run.report["data"]["profile"], "legacy");
}

#[test]
fn fixture_unknown_country_is_a_runtime_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    decide_cmd("unknown_country", &report_path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("papers error:"))
        .stderr(predicate::str::contains("ZZZ"));

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["error"]["code"], "runtime_error");
    assert_eq!(report["error"]["rule_id"], "tool.runtime");
    assert_eq!(report["decisions"], serde_json::json!([]));
}

#[test]
fn profile_override_rejects_unknown_country() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    decide_cmd("unknown_country", &report_path)
        .args(["--profile", "strict"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[\"Accept\",\"Reject\"]\n"));
}

// ============================================================================
// CLI behavior tests
// ============================================================================

#[test]
fn decide_creates_missing_output_directories() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("subdir").join("report.json");

    decide_cmd("returning_resident", &report_path)
        .assert()
        .success();

    assert!(report_path.exists(), "report should be created");
}

#[test]
fn sequential_and_parallel_runs_agree() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let parallel_path = temp_dir.path().join("parallel.json");
    let sequential_path = temp_dir.path().join("sequential.json");

    decide_cmd("visas", &parallel_path).assert().success();
    decide_cmd("visas", &sequential_path)
        .arg("--sequential")
        .assert()
        .success();

    let read = |p: &Path| -> Value {
        normalize_nondeterministic(
            serde_json::from_str(&std::fs::read_to_string(p).expect("read")).expect("parse"),
        )
    };
    assert_eq!(read(&parallel_path), read(&sequential_path));
}

#[test]
fn plain_format_prints_one_decision_per_line() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    decide_cmd("watchlist", &report_path)
        .args(["--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Secondary\nSecondary\nAccept\n"));
}

#[test]
fn trail_format_names_the_deciding_rule() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    decide_cmd("returning_resident", &report_path)
        .args(["--format", "trail"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "#0 Accept [admission.eligibility:returning_resident] home country is KAN\n",
        ));
}

#[test]
fn as_of_flag_overrides_config() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    // Before the first visa was issued, so its date is in the future.
    let output = decide_cmd("visas", &report_path)
        .args(["--as-of", "2024-01-01"])
        .output()
        .expect("run papers decide");
    assert!(output.status.success());

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["data"]["as_of"], "2024-01-01");
    assert_eq!(report["decisions"][0], "Reject");
    assert_eq!(report["determinations"][0]["code"], "visa_expired");
}

#[test]
fn decide_writes_markdown_when_requested() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");
    let md_path = temp_dir.path().join("comment.md");

    decide_cmd("medical_advisory", &report_path)
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .success();

    let md = std::fs::read_to_string(&md_path).expect("read markdown");
    assert!(md.starts_with("# Papers decision report"));
    assert!(md.contains("## Decisions"));
    assert!(md.contains("origin_advisory"));
}

#[test]
fn md_renders_an_existing_report() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    decide_cmd("watchlist", &report_path).assert().success();

    papers_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Papers decision report"))
        .stdout(predicate::str::contains("passport_match"));
}

#[test]
fn md_rejects_a_foreign_report() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");
    std::fs::write(&report_path, r#"{"schema": "other.report.v1"}"#).expect("write report");

    papers_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown report schema"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    papers_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("decide")
        .arg("--travelers")
        .arg(fixture_file("returning_resident", "travelers.json"))
        .arg("--watchlist")
        .arg(fixture_file("returning_resident", "watchlist.json"))
        .arg("--countries")
        .arg(fixture_file("returning_resident", "countries.json"))
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config"));
}

#[test]
fn explain_known_code() {
    papers_cmd()
        .args(["explain", "visa_expired"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Visa Expired"));
}

#[test]
fn explain_known_rule_id() {
    papers_cmd()
        .args(["explain", "admission.watchlist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admission.watchlist").or(predicate::str::contains(
            "Watchlist",
        )));
}

#[test]
fn explain_unknown_identifier_fails() {
    papers_cmd()
        .args(["explain", "deportation"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown rule_id or code: deportation"));
}
