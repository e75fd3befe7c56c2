use crate::cli::support::{docsize, init_schema, write_schema};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Validate command tests
// ============================================================================

#[test]
fn test_validate_example_schema() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout("Schema OK: 4 fields (2 single, 2 repeated)\n");
}

#[test]
fn test_validate_duplicate_id() {
    let dir = tempdir().unwrap();
    let path = write_schema(
        dir.path(),
        "dup.toml",
        r#"collection = "posts"

[[fields]]
id = "a"
name = "title"
type = "string"

[[repeated]]
id = "a"
name = "count"
type = "number"
"#,
    );

    docsize()
        .args(["--format", "json", "validate"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"duplicate_field_id\""));
}

#[test]
fn test_validate_parent_errors() {
    let dir = tempdir().unwrap();
    let unknown = write_schema(
        dir.path(),
        "unknown.yaml",
        "collection: posts\nfields:\n  - id: a\n    parent: nope\n    name: x\n    type: number\n",
    );
    let leaf_parent = write_schema(
        dir.path(),
        "leaf.yaml",
        "collection: posts\nfields:\n  - id: a\n    name: x\n    type: number\n  - id: b\n    parent: a\n    name: y\n    type: number\n",
    );

    docsize()
        .arg("validate")
        .arg(&unknown)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown parent nope"));

    docsize()
        .arg("validate")
        .arg(&leaf_parent)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a map or array"));
}

#[test]
fn test_validate_cycle() {
    let dir = tempdir().unwrap();
    let path = write_schema(
        dir.path(),
        "cycle.json",
        r#"{
            "collection": "posts",
            "fields": [
                {"id": "a", "parent": "b", "name": "x", "type": "map"},
                {"id": "b", "parent": "a", "name": "y", "type": "map"}
            ]
        }"#,
    );

    docsize()
        .args(["--format", "json", "validate"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"structural_cycle\""));
}

#[test]
fn test_validate_section_root_id() {
    let dir = tempdir().unwrap();
    let path = write_schema(
        dir.path(),
        "reserved.toml",
        r#"collection = "posts"

[[fields]]
id = "repeated"
name = "extra"
type = "map"

[[repeated]]
id = "r1"
name = "likes"
type = "number"
"#,
    );

    docsize()
        .args(["--format", "json", "validate"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"reserved_field_id\""));
}
