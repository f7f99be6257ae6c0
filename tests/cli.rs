use assert_cmd::Command;
use predicates::prelude::*;

fn emptrack(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("emptrack").unwrap();
    cmd.env("EMPTRACK_CONFIG_DIR", config_dir)
        .env_remove("EMPTRACK_DB_HOST")
        .env_remove("EMPTRACK_DB_PORT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_only_ambient_flags() {
    let temp_dir = tempfile::tempdir().unwrap();
    emptrack(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("EMPTRACK_DB_HOST"));
}

#[test]
fn version_matches_package() {
    let temp_dir = tempfile::tempdir().unwrap();
    emptrack(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unreachable_database_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    emptrack(temp_dir.path())
        // Port 1 is reserved and never runs MySQL.
        .env("EMPTRACK_DB_HOST", "127.0.0.1")
        .env("EMPTRACK_DB_PORT", "1")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("WELCOME TO EMPLOYEE TRACKER").not());
}

#[test]
fn malformed_config_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ not json").unwrap();
    emptrack(temp_dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn bad_port_override_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    emptrack(temp_dir.path())
        .env("EMPTRACK_DB_PORT", "not-a-port")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("EMPTRACK_DB_PORT"));
}
