use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn nebula() -> Command {
    let mut cmd = Command::cargo_bin("nebula").expect("binary should build");
    cmd.env_remove("NEBULA_TOKEN")
        .env_remove("NEBULA_BASE_URL")
        .env_remove("NEBULA_PASSWORD");
    cmd
}

#[test]
fn test_help_lists_commands() {
    nebula()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("record"))
        .stdout(predicate::str::contains("db"));
}

#[test]
fn test_protected_command_requires_token() {
    let dir = tempdir().expect("Failed to create temp dir");
    nebula()
        .args(["--config-dir", dir.path().to_str().unwrap(), "db", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token"));
}

#[test]
fn test_config_set_then_show() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_dir = dir.path().to_str().unwrap();

    nebula()
        .args([
            "--config-dir",
            config_dir,
            "--profile",
            "staging",
            "config",
            "set",
            "url",
            "https://staging.example.com",
        ])
        .assert()
        .success();

    nebula()
        .args(["--config-dir", config_dir, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[staging]"))
        .stdout(predicate::str::contains("https://staging.example.com"));
}

#[test]
fn test_invalid_record_json_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    nebula()
        .args([
            "--config-dir",
            dir.path().to_str().unwrap(),
            "--token",
            "secret",
            "record",
            "create",
            "inventory",
            "widgets",
            "not json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid record JSON"));
}
