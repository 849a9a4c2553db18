use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

/// Helper to create a Command for the formcheck binary
fn formcheck() -> Command {
    Command::cargo_bin("formcheck").expect("Failed to find formcheck binary")
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_definition() {
    formcheck()
        .arg("check")
        .arg(fixture_path("registration.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("registration"))
        .stdout(predicate::str::contains("well-formed"))
        .stdout(predicate::str::contains("confirm_password"));
}

#[test]
fn test_check_toml_definition() {
    formcheck()
        .arg("check")
        .arg(fixture_path("registration.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("registration"))
        .stdout(predicate::str::contains("2 field"));
}

#[test]
fn test_check_dangling_reference_fails() {
    formcheck()
        .arg("check")
        .arg(fixture_path("bad_reference.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("references unknown field"));
}

#[test]
fn test_check_missing_file_fails() {
    formcheck()
        .arg("check")
        .arg("tests/fixtures/does_not_exist.yml")
        .assert()
        .failure();
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_passing_submission() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("values_ok.json"))
        .arg("--schema")
        .arg(fixture_path("registration.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_failing_submission() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("values_bad.json"))
        .arg("--schema")
        .arg(fixture_path("registration.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("must be a valid email address"))
        .stdout(predicate::str::contains("passwords do not match"))
        .stderr(predicate::str::contains("validation failed with"));
}

#[test]
fn test_validate_json_output() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("values_bad.json"))
        .arg("--schema")
        .arg(fixture_path("registration.yml"))
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("\"field\": \"email\""));
}

#[test]
fn test_validate_against_builtin_form() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let values = dir.path().join("login.json");
    fs::write(
        &values,
        r#"{"email": "claire@example.fr", "password": "s3cretpw"}"#,
    )
    .expect("Failed to write values file");

    formcheck()
        .arg("validate")
        .arg(values.to_str().expect("utf-8 path"))
        .arg("--builtin")
        .arg("login")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_unknown_builtin_fails() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("values_ok.json"))
        .arg("--builtin")
        .arg("no_such_form")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown built-in form"));
}

#[test]
fn test_validate_requires_a_schema_source() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("values_ok.json"))
        .assert()
        .failure();
}

#[test]
fn test_validate_malformed_values_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let values = dir.path().join("broken.json");
    fs::write(&values, "{ not json").expect("Failed to write values file");

    formcheck()
        .arg("validate")
        .arg(values.to_str().expect("utf-8 path"))
        .arg("--builtin")
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse values file"));
}

// ============================================================================
// forms command tests
// ============================================================================

#[test]
fn test_forms_lists_builtins() {
    formcheck()
        .arg("forms")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("registration"))
        .stdout(predicate::str::contains("checkout"));
}
