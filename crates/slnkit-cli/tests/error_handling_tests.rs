//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn slnkit() -> Command {
    Command::cargo_bin("slnkit").unwrap()
}

#[test]
fn invalid_project_name_exits_2_with_suggestions() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Acme.sln"), "").unwrap();

    slnkit()
        .args([
            "add",
            ".hidden",
            "--root",
            dir.path().to_str().unwrap(),
            "--sln",
            "Acme",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn missing_solution_file_exits_3() {
    let dir = TempDir::new().unwrap(); // no .sln inside

    slnkit()
        .args([
            "add",
            "AcmeApp",
            "--root",
            dir.path().to_str().unwrap(),
            "--sln",
            "Acme",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Visual Studio solution"))
        .stderr(predicate::str::contains("dotnet new sln"));
}

#[test]
fn removing_a_missing_project_exits_3() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Acme.sln"), "").unwrap();

    slnkit()
        .args([
            "remove",
            "AcmeApp",
            "--root",
            dir.path().to_str().unwrap(),
            "--sln",
            "Acme",
            "--yes",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Cannot find project"));
}

#[test]
fn adding_an_existing_project_exits_2() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Acme.sln"), "").unwrap();
    std::fs::create_dir(dir.path().join("AcmeApp")).unwrap();

    slnkit()
        .args([
            "add",
            "AcmeApp",
            "--root",
            dir.path().to_str().unwrap(),
            "--sln",
            "Acme",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_log_dir_exits_4() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Acme.sln"), "").unwrap();
    let bogus = dir.path().join("no-such-logs");

    slnkit()
        .args([
            "add",
            "AcmeApp",
            "--root",
            dir.path().to_str().unwrap(),
            "--sln",
            "Acme",
            "--log-dir",
            bogus.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Log path"));
}

#[test]
fn missing_solution_name_exits_2() {
    let dir = TempDir::new().unwrap();

    slnkit()
        .args(["add", "AcmeApp", "--root", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--sln"));
}

#[test]
fn remove_without_confirmation_fails_when_not_a_tty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Acme.sln"), "").unwrap();
    std::fs::create_dir(dir.path().join("AcmeApp")).unwrap();

    // stdin is piped, so the prompt cannot run; --yes is required.
    slnkit()
        .args([
            "remove",
            "AcmeApp",
            "--root",
            dir.path().to_str().unwrap(),
            "--sln",
            "Acme",
        ])
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn quiet_does_not_stand_in_for_remove_confirmation() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Acme.sln"), "").unwrap();
    std::fs::create_dir(dir.path().join("AcmeApp")).unwrap();

    slnkit()
        .args([
            "remove",
            "AcmeApp",
            "--root",
            dir.path().to_str().unwrap(),
            "--sln",
            "Acme",
            "--quiet",
        ])
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn missing_explicit_config_file_exits_4() {
    slnkit()
        .args([
            "add",
            "AcmeApp",
            "--sln",
            "Acme",
            "--config",
            "/no/such/slnkit.toml",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("config"));
}
