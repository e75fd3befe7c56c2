use crate::cli::support::{docsize, init_schema};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_writes_default_schema() {
    let dir = tempdir().unwrap();

    docsize()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote example schema to docsize.toml"));

    let content = std::fs::read_to_string(dir.path().join("docsize.toml")).unwrap();
    assert!(content.contains("collection = \"posts\""));
    assert!(content.contains("my-awesome-document-id"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .arg("init")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    docsize()
        .arg("init")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_init_json_and_yaml_extensions() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("schema.json");
    let yaml_path = dir.path().join("schema.yaml");

    docsize()
        .args(["--format", "json", "init"])
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));

    docsize().arg("init").arg(&yaml_path).assert().success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["collection"], "posts");
    assert_eq!(json["fields"][0]["type"], "string");

    let yaml = std::fs::read_to_string(&yaml_path).unwrap();
    assert!(yaml.contains("collection: posts"));
}

#[test]
fn test_init_records_header() {
    let dir = tempdir().unwrap();

    docsize()
        .current_dir(dir.path())
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H docsize=1 records=1 mode=init status=ok",
        ));
}
