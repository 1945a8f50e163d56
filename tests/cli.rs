use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("enade-dash")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("course"));
}

#[test]
fn test_report_against_unreachable_backend() {
    let home = tempfile::tempdir().unwrap();
    Command::cargo_bin("enade-dash")
        .unwrap()
        .env("HOME", home.path())
        .args(["report", "--base-url", "http://127.0.0.1:9", "--timeout", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Erro ao carregar dados do dashboard"))
        .stdout(predicate::str::contains("Erro ao carregar áreas"));
}

#[test]
fn test_invalid_base_url_rejected() {
    let home = tempfile::tempdir().unwrap();
    Command::cargo_bin("enade-dash")
        .unwrap()
        .env("HOME", home.path())
        .args(["report", "--base-url", "localhost:5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url"));
}

#[test]
fn test_config_file_is_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_url: ftp://example.org").unwrap();

    Command::cargo_bin("enade-dash")
        .unwrap()
        .arg("--config")
        .arg(file.path())
        .arg("areas")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ftp://example.org"));
}
