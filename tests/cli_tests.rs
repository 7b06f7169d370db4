use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn terra_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("terra"))
}

fn db_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("terra.db").display())
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    terra_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API"));
}

#[test]
fn test_version() {
    terra_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("terra"));
}

#[test]
fn test_missing_explicit_config_fails() {
    terra_cmd()
        .args(["migrate", "--config", "/nonexistent/terra.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

// =============================================================================
// Migrate
// =============================================================================

#[test]
fn test_migrate_creates_database() {
    let temp_dir = TempDir::new().unwrap();

    terra_cmd()
        .args(["migrate", "--database-url", &db_url(&temp_dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied"));

    assert!(temp_dir.path().join("terra.db").exists());
}

// =============================================================================
// Query
// =============================================================================

#[test]
fn test_query_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let url = db_url(&temp_dir);

    terra_cmd()
        .args([
            "query",
            r#"mutation { createCountry(id: "IDN", name: "Indonesia", code: "ID") { id } }"#,
            "--database-url",
            &url,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("IDN"));

    terra_cmd()
        .args(["query", "{ getCountries { id name } }", "--database-url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Indonesia"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    terra_cmd()
        .args([
            "query",
            "query($id: ID!) { getCountry(id: $id) { id } }",
            "--variables",
            r#"{"id": "XXX"}"#,
            "--database-url",
            &db_url(&temp_dir),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}

#[test]
fn test_query_invalid_operation_fails() {
    let temp_dir = TempDir::new().unwrap();

    terra_cmd()
        .args([
            "query",
            "{ nonexistentOperation }",
            "--database-url",
            &db_url(&temp_dir),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("errors"));
}
