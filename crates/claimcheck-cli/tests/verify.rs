use assert_cmd::Command;
use claimcheck_test_util::normalize_nondeterministic;
use claimcheck_types::ClaimReportV1;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;

/// Offline run in a directory without `claimcheck.toml`, isolated from the caller's env.
#[allow(deprecated)]
fn offline_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("claimcheck").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("FACTCHECK_API_KEY");
    cmd
}

fn verify(dir: &Path, claim: &str) -> Command {
    let mut cmd = offline_cmd(dir);
    cmd.args(["verify", claim, "--offline"]);
    cmd
}

#[test]
fn knowledge_base_claim_is_verified() {
    let tmp = tempfile::tempdir().unwrap();
    verify(tmp.path(), "how many countries are in the world")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict:     Verified\n"))
        .stdout(predicate::str::contains("There are 195 countries in the world"))
        .stdout(predicate::str::contains("United Nations"));
}

#[test]
fn incorrect_ranking_claim_is_corrected() {
    let tmp = tempfile::tempdir().unwrap();
    verify(tmp.path(), "India is the 10th largest economy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict:     False\n"))
        .stdout(predicate::str::contains(
            "Correction:  India is the 5th largest economy\n",
        ))
        .stdout(predicate::str::contains("IMF [corrected]"));
}

#[test]
fn correct_ranking_claim_is_true() {
    let tmp = tempfile::tempdir().unwrap();
    verify(tmp.path(), "Canada is the 2nd largest country by area")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict:     True\n"))
        .stdout(predicate::str::contains("The area ranking claim is correct."));
}

#[test]
fn unknown_claim_is_unverified_offline() {
    let tmp = tempfile::tempdir().unwrap();
    verify(tmp.path(), "pigs can fly")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict:     Unverified\n"))
        .stdout(predicate::str::contains("Evidence:").not());
}

#[test]
fn empty_claim_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    verify(tmp.path(), "   ")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("please enter a claim to verify"));
}

#[test]
fn invalid_config_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("claimcheck.toml"), "profile = \"strict\"\n").unwrap();
    verify(tmp.path(), "pigs can fly")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown profile: strict"));
}

#[test]
fn config_knowledge_entries_are_used() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("claimcheck.toml"),
        r#"
profile = "offline"

[[knowledge]]
id = "boiling point"
triggers = ["water boils at"]
answer = "Water boils at 100 degrees Celsius at sea level."
"#,
    )
    .unwrap();
    offline_cmd(tmp.path())
        .args(["verify", "Water boils at 50 degrees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict:     Verified\n"))
        .stdout(predicate::str::contains(
            "Correction:  Water boils at 100 degrees Celsius at sea level.\n",
        ));
}

#[test]
fn json_report_matches_schema() {
    let tmp = tempfile::tempdir().unwrap();
    let output = verify(tmp.path(), "India is the 10th largest economy")
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    let schema = serde_json::to_value(schemars::schema_for!(ClaimReportV1)).unwrap();
    let validator = jsonschema::validator_for(&schema).unwrap();
    let errors: Vec<String> = validator.iter_errors(&report).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let report = normalize_nondeterministic(report);
    assert_eq!(report["schema"], "claimcheck.report.v1");
    assert_eq!(report["tool"]["version"], "__VERSION__");
    assert_eq!(report["run"]["duration_ms"], 0);
    assert_eq!(report["decided_by"], "ranking_check");
    assert_eq!(report["result"]["verdict"], "False");
    assert_eq!(
        report["result"]["corrected_statement"],
        "India is the 5th largest economy"
    );
    assert_eq!(report["result"]["evidence"][0]["rating"], "corrected");
}

#[test]
fn report_out_renders_with_md() {
    let tmp = tempfile::tempdir().unwrap();
    let report_path = tmp.path().join("out/report.json");
    verify(tmp.path(), "The Earth is flat")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();
    assert!(report_path.exists());

    let md_path = tmp.path().join("out/report.md");
    offline_cmd(tmp.path())
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .arg("-o")
        .arg(&md_path)
        .assert()
        .success();
    let md = std::fs::read_to_string(&md_path).unwrap();
    assert!(md.starts_with("# Claim check\n\n> The Earth is flat\n"));
    assert!(md.contains("- Verdict: **Verified**"));
    assert!(md.contains("- Decided by: `knowledge_base`"));
    assert!(md.contains("1. [NASA]("));
}

#[test]
fn md_rejects_missing_report() {
    let tmp = tempfile::tempdir().unwrap();
    offline_cmd(tmp.path())
        .args(["md", "--report", "nope.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read report: nope.json"));
}

#[test]
fn markdown_format_prints_to_stdout() {
    let tmp = tempfile::tempdir().unwrap();
    verify(tmp.path(), "Canada is the 2nd largest country by area")
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Claim check\n"))
        .stdout(predicate::str::contains("No evidence."));
}
