use crate::cli::support::{docsize, init_schema, stdout_json, write_schema};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Estimate command tests
// ============================================================================

#[test]
fn test_estimate_example_schema() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .arg("estimate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Document: posts/my-awesome-document-id"))
        .stdout(predicate::str::contains("Estimated size: 172 Bytes (172 bytes)"))
        .stdout(predicate::str::contains("  Repeated (x1):      65"))
        .stdout(predicate::str::contains("Limit: 0.02% of 1 MB"));
}

#[test]
fn test_estimate_json_breakdown() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    let output = docsize()
        .args(["--format", "json", "estimate"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = stdout_json(&output);
    assert_eq!(report["total"], 172);
    assert_eq!(report["breakdown"]["path"], 45);
    assert_eq!(report["breakdown"]["fields"], 30);
    assert_eq!(report["breakdown"]["repeated"], 65);
    assert_eq!(report["breakdown"]["document_overhead"], 32);
    assert_eq!(report["limit"], 1_048_576);
}

#[test]
fn test_estimate_multiplier_override() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    let output = docsize()
        .args(["--format", "json", "estimate", "-m", "3"])
        .arg(&path)
        .output()
        .unwrap();
    let report = stdout_json(&output);
    // name (15) + 3 entries of 50
    assert_eq!(report["breakdown"]["repeated"], 165);
    assert_eq!(report["total"], 272);

    let output = docsize()
        .args(["--format", "json", "estimate", "-m", "0"])
        .arg(&path)
        .output()
        .unwrap();
    let report = stdout_json(&output);
    assert_eq!(report["breakdown"]["repeated"], 0);
    assert_eq!(report["total"], 107);
}

#[test]
fn test_estimate_collection_and_id_kind() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    let output = docsize()
        .args([
            "--format",
            "json",
            "estimate",
            "--collection",
            "orders",
            "--id-kind",
            "custom-int",
            "--id",
            "1001",
        ])
        .arg(&path)
        .output()
        .unwrap();
    let report = stdout_json(&output);
    assert_eq!(report["document"], "orders/1001");
    assert_eq!(report["breakdown"]["path"], 7 + 8 + 16);
    assert_eq!(report["total"], 158);

    docsize()
        .args(["estimate", "--collection", "orders", "--id-kind", "custom-int", "--id", "x"])
        .arg(&path)
        .assert()
        .code(2);
}

#[test]
fn test_estimate_id_kind_requires_collection() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .args(["estimate", "--id-kind", "auto"])
        .arg(&path)
        .assert()
        .code(2);
}

#[test]
fn test_estimate_id_requires_collection() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .args(["estimate", "--id", "1001"])
        .arg(&path)
        .assert()
        .code(2);
}

#[test]
fn test_estimate_json_schema_with_sample_array() {
    let dir = tempdir().unwrap();
    let path = write_schema(
        dir.path(),
        "tags.json",
        r#"{
            "path": "users/alice",
            "fields": [
                {"id": "a", "name": "tags", "type": "array", "size": 3},
                {"id": "b", "parent": "a", "type": "string", "sample": "€€€"}
            ]
        }"#,
    );

    let output = docsize()
        .args(["--format", "json", "estimate"])
        .arg(&path)
        .output()
        .unwrap();
    let report = stdout_json(&output);
    // tags name (5) + 3 elements of 9 bytes + terminator
    assert_eq!(report["breakdown"]["fields"], 35);
    assert_eq!(report["breakdown"]["path"], 28);
    assert_eq!(report["total"], 95);
}

#[test]
fn test_estimate_config_clamps_field_size() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());
    let config = write_schema(dir.path(), "config.toml", "[limits]\nmax_field_size = 10\n");

    let output = docsize()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .arg("estimate")
        .arg(&path)
        .output()
        .unwrap();
    let report = stdout_json(&output);
    // comment clamped from 27 to 10 bytes
    assert_eq!(report["breakdown"]["repeated"], 48);
    assert_eq!(report["total"], 155);
}

#[test]
fn test_estimate_quiet_prints_total_only() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .args(["--quiet", "estimate"])
        .arg(&path)
        .assert()
        .success()
        .stdout("172 Bytes\n");
}

#[test]
fn test_estimate_records() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .args(["--format", "records", "estimate"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H docsize=1 records=1 mode=estimate document=\"posts/my-awesome-document-id\" total=172",
        ))
        .stdout(predicate::str::contains("S repeated 65 multiplier=1"));
}

#[test]
fn test_estimate_missing_schema() {
    let dir = tempdir().unwrap();

    docsize()
        .arg("estimate")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("schema not found"));

    docsize()
        .args(["--format", "json", "estimate"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"schema_not_found\""));
}

#[test]
fn test_estimate_malformed_schema() {
    let dir = tempdir().unwrap();
    let path = write_schema(dir.path(), "bad.toml", "fields = 42\n");

    docsize()
        .arg("estimate")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid schema"));
}
