use crate::cli::support::{docsize, init_schema, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Tree command tests
// ============================================================================

#[test]
fn test_tree_human() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .arg("tree")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("  author (string) 16 bytes"))
        .stdout(predicate::str::contains("  repeated_items (array) x1 65 bytes"))
        .stdout(predicate::str::contains("      comment (string) 36 bytes"));
}

#[test]
fn test_tree_json() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    let output = docsize()
        .args(["--format", "json", "tree"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree = stdout_json(&output);
    let fields = tree["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[1]["name"], "views");
    assert_eq!(fields[1]["cost"], 14);
    assert_eq!(fields[2]["children"][0]["cost"], 50);
}

#[test]
fn test_tree_records() {
    let dir = tempdir().unwrap();
    let path = init_schema(dir.path());

    docsize()
        .args(["--format", "records", "tree"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=tree"))
        .stdout(predicate::str::contains("fields=6"))
        .stdout(predicate::str::contains("F 0 s1 string \"author\" cost=16"));
}
