//! Integration tests for `photosync check`.

mod common;

use common::{household_cmd, photosync_cmd};
use predicates::prelude::*;

#[test]
fn test_check_clean_configuration() {
    household_cmd()
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout("No issues found.\n");
}

#[test]
fn test_check_reports_without_failing() {
    let mut cmd = photosync_cmd();
    cmd.env("GOOGLE_ACCOUNTS", "alice,bob")
        .env("SYNOLOGY_ACCOUNTS", "alice")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: Google account 'bob' has no Synology pairing",
        ))
        .stdout(predicate::str::contains(
            "warning: Synology account 'alice' has no username or password",
        ));
}

#[test]
fn test_check_strict_fails_on_warnings() {
    let mut cmd = photosync_cmd();
    cmd.env("SYNOLOGY_ACCOUNTS", "alice,alice")
        .args(["check", "--strict"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("issue(s)"));
}

#[test]
fn test_check_json_lists_warning_kinds() {
    let mut cmd = photosync_cmd();
    let output = cmd
        .env("GOOGLE_ACCOUNTS", "alice")
        .env("SYNOLOGY_ACCOUNTS", "alice")
        .env("SYNOLOGY_alice_USERNAME", "alice")
        .env("SYNOLOGY_alice_PASSWORD", "pw")
        .env("PAIRING_1_GOOGLE", "ghost")
        .env("PAIRING_1_SYNOLOGY", "alice")
        .args(["-o", "json", "check"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let kinds: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|w| w["kind"].as_str())
        .collect();
    assert_eq!(kinds, ["unknown_pairing_google_account", "unpaired_google_account"]);
}

#[test]
fn test_warnings_logged_to_stderr() {
    let mut cmd = photosync_cmd();
    cmd.env("GOOGLE_ACCOUNTS", "bob")
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("has no Synology pairing"));
}
