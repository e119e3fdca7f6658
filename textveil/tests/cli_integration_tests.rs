// textveil/tests/cli_integration_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn textveil_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("textveil"));
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("TEXTVEIL_ALLOW_DEBUG_PII");
    cmd
}

/// A custom predicate to check if a string is valid JSON.
fn is_json() -> impl Predicate<str> {
    predicate::function(|s: &str| serde_json::from_str::<Value>(s).is_ok())
}

#[test]
fn test_redact_masks_email_and_phone_from_stdin() {
    textveil_cmd()
        .write_stdin("Contact john@example.com or call 555-123-4567.")
        .arg("redact")
        .assert()
        .success()
        .stdout(predicate::str::contains("[EMAIL_ADDRESS]"))
        .stdout(predicate::str::contains("[PHONE_NUMBER]"))
        .stdout(predicate::str::contains("john@example.com").not());
}

#[test]
fn test_redact_mode_removes_spans_entirely() {
    textveil_cmd()
        .write_stdin("john@example.com")
        .args(["redact", "--mode", "redact", "--no-summary"])
        .assert()
        .success()
        .stdout(predicate::eq("\n"));
}

#[test]
fn test_redact_summary_reports_score_on_stderr() {
    textveil_cmd()
        .write_stdin("Contact john@example.com today.")
        .arg("redact")
        .assert()
        .success()
        .stderr(predicate::str::contains("Similarity score:"))
        .stderr(predicate::str::contains("EMAIL_ADDRESS: 1"));
}

#[test]
fn test_empty_input_fails_before_matching() {
    textveil_cmd()
        .write_stdin("   \n ")
        .arg("redact")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_scan_reports_no_matches_on_stderr() {
    textveil_cmd()
        .write_stdin("nothing secret here")
        .arg("scan")
        .assert()
        .success()
        .stderr(predicate::str::contains("No entities detected."));
}

#[test]
fn test_scan_counts_and_table_on_stdout() {
    textveil_cmd()
        .write_stdin("Mail a@b.co and c@d.co; call 555-123-4567.")
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entities detected: 3"))
        .stdout(predicate::str::contains("EMAIL_ADDRESS: 2"))
        .stdout(predicate::str::contains("PHONE_NUMBER: 1"));
}

#[test]
fn test_scan_json_stdout_is_valid_json() {
    textveil_cmd()
        .write_stdin("reach me at a@b.co")
        .args(["scan", "--json-stdout"])
        .assert()
        .success()
        .stdout(is_json())
        .stdout(predicate::str::contains("EMAIL_ADDRESS"));
}

#[test]
fn test_scan_json_file_export() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let json_path = dir.path().join("summary.json");

    textveil_cmd()
        .write_stdin("ping 192.168.1.1 please")
        .args(["scan", "--json-file"])
        .arg(&json_path)
        .assert()
        .success();

    let payload: Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    assert_eq!(payload["total"], 1);
    assert_eq!(payload["entities"][0]["entity_type"], "IP_ADDRESS");
    Ok(())
}

#[test]
fn test_redact_json_stdout_reports_counts() {
    let output = textveil_cmd()
        .write_stdin("Contact john@example.com or call 555-123-4567.")
        .args(["redact", "--json-stdout"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["counts"]["total"], 2);
    assert_eq!(payload["counts"]["email_address"], 1);
    assert_eq!(payload["counts"]["phone_number"], 1);
    assert!(payload["output"].as_str().unwrap().contains("[EMAIL_ADDRESS]"));
}

#[test]
fn test_disable_flag_turns_a_pattern_off() {
    textveil_cmd()
        .write_stdin("write to a@b.com soon")
        .args(["redact", "--disable", "email", "--no-summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a@b.com"));
}

#[test]
fn test_input_file_is_read_and_output_file_written() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.txt");
    fs::write(&input_path, "The router is at 10.1.2.3 today.")?;

    textveil_cmd()
        .args(["redact", "--no-summary", "-i"])
        .arg(&input_path)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let rewritten = fs::read_to_string(&output_path)?;
    assert!(rewritten.contains("[IP_ADDRESS]"));
    assert!(!rewritten.contains("10.1.2.3"));
    Ok(())
}

#[test]
fn test_custom_config_pattern_is_applied() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("patterns.yaml");
    fs::write(
        &config_path,
        r#"
patterns:
  - name: ticket_id
    entity_type: CREDIT_CARD
    pattern: 'TCK-[0-9]{6}'
"#,
    )?;

    textveil_cmd()
        .write_stdin("escalated as TCK-123456 yesterday")
        .args(["redact", "--no-summary", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[CREDIT_CARD]"));
    Ok(())
}
