//! Integration tests for the vaultcli binary.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The master password comes from `VAULTCLI_PASSWORD`, and every
//! command that would otherwise prompt is given its input as flags.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: a Command for the vaultcli binary running inside `dir`.
fn vaultcli(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vaultcli").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("VAULTCLI_PATH")
        .env_remove("VAULTCLI_LOG")
        .env("VAULTCLI_PASSWORD", "Secret123");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted credential vault"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultcli"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn full_lifecycle_through_binary() {
    let tmp = TempDir::new().unwrap();

    vaultcli(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized encrypted vault"));
    tmp.child("vault.enc").assert(predicate::path::exists());

    vaultcli(&tmp)
        .args(["add", "--name", "github", "--username", "alice", "--password", "p@ss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry 'github'"));

    vaultcli(&tmp)
        .args(["get", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("p@ss").not());

    vaultcli(&tmp)
        .args(["get", "github", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p@ss"));

    vaultcli(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("4 chars"));

    vaultcli(&tmp)
        .args(["delete", "github", "--force"])
        .assert()
        .success();

    vaultcli(&tmp)
        .args(["get", "github"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn init_twice_fails() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp).arg("init").assert().success();
    vaultcli(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn wrong_password_is_reported() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp).arg("init").assert().success();

    vaultcli(&tmp)
        .env("VAULTCLI_PASSWORD", "WrongSecret")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong master password or corrupted vault"));
}

#[test]
fn get_on_missing_vault_fails() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp)
        .args(["get", "github"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vault not found"));
}

#[test]
fn path_flag_and_config_file_select_the_vault() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".vaultcli.toml")
        .write_str("vault_path = \"configured.enc\"\n")
        .unwrap();

    vaultcli(&tmp).arg("init").assert().success();
    tmp.child("configured.enc").assert(predicate::path::exists());

    vaultcli(&tmp)
        .args(["--path", "explicit.enc", "init"])
        .assert()
        .success();
    tmp.child("explicit.enc").assert(predicate::path::exists());
    tmp.child("vault.enc").assert(predicate::path::missing());
}

#[test]
fn generate_prints_password_and_entropy() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp)
        .args(["generate", "--length", "20", "--no-symbols"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^[A-Za-z0-9]{20}$").unwrap())
        .stdout(predicate::str::contains("Estimated entropy"));
}

#[test]
fn generate_rejects_tiny_length() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp)
        .args(["generate", "--length", "2"])
        .assert()
        .failure();
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    vaultcli(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultcli"));
}
