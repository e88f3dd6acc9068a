use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster(db_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_DB_PATH", db_dir.join("roster.db")).env("RUST_LOG", "warn");
    cmd
}

fn seed(db_dir: &Path) {
    let file = db_dir.join("citizens.json");
    std::fs::write(
        &file,
        r#"[
            {"identifier": "c1", "lastname": "Smith", "job": "police", "jobGrade": 2},
            {"identifier": "c2", "lastname": "Adams", "job": "ambulance", "jobGrade": 1},
            {"identifier": "c3", "lastname": "Brown", "job": "police", "jobGrade": 4}
        ]"#,
    )
    .unwrap();
    roster(db_dir)
        .args(["import", "citizens"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("imported 3 rows into citizens"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paginated resource lists"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_resources() {
    let dir = TempDir::new().unwrap();
    roster(dir.path())
        .arg("resources")
        .assert()
        .success()
        .stdout(predicate::str::contains("wiki_pages"))
        .stdout(predicate::str::contains("\"maxPageSize\": 2000"));
}

#[test]
fn test_cli_resources_env_override() {
    let dir = TempDir::new().unwrap();
    roster(dir.path())
        .env("ROSTER_ACCOUNTS_MAX_PAGE_SIZE", "750")
        .arg("resources")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"maxPageSize\": 750"));
}

#[test]
fn test_cli_import_then_list() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());
    roster(dir.path())
        .args(["list", "citizens", "--page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalCount\": 3"))
        .stdout(predicate::str::contains("\"end\": 2"))
        .stdout(predicate::str::contains("Adams"))
        .stdout(predicate::str::contains("Smith").not())
        .stderr(predicate::str::contains("page 1 of 2, 2 of 3 rows; next: --offset 2"));
}

#[test]
fn test_cli_list_with_filter_and_sort() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());
    roster(dir.path())
        .args(["list", "citizens", "--filter", "job=police", "--sort", "jobGrade", "--desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalCount\": 2"))
        .stdout(predicate::str::contains("Adams").not());
}

#[test]
fn test_cli_list_negative_offset_fails() {
    let dir = TempDir::new().unwrap();
    roster(dir.path())
        .args(["list", "citizens", "--offset", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("offset must be >= 0"));
}

#[test]
fn test_cli_list_unknown_resource_fails() {
    let dir = TempDir::new().unwrap();
    roster(dir.path())
        .args(["list", "documents"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown resource"));
}

#[test]
fn test_cli_import_rejects_non_array() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.json");
    std::fs::write(&file, r#"{"identifier": "c1"}"#).unwrap();
    roster(dir.path())
        .args(["import", "citizens"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}
