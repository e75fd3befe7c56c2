use crate::cli::support::{docsize, stdout_json};
use tempfile::tempdir;

// ============================================================================
// Format-bytes command tests
// ============================================================================

#[test]
fn test_format_bytes_human() {
    docsize()
        .args(["format-bytes", "1536"])
        .assert()
        .success()
        .stdout("1.5 KB\n");

    docsize()
        .args(["format-bytes", "0"])
        .assert()
        .success()
        .stdout("0 Bytes\n");

    docsize()
        .args(["format-bytes", "1048576", "--decimals", "0"])
        .assert()
        .success()
        .stdout("1 MB\n");
}

#[test]
fn test_format_bytes_json_and_records() {
    let output = docsize()
        .args(["--format", "json", "format-bytes", "1536"])
        .output()
        .unwrap();
    let value = stdout_json(&output);
    assert_eq!(value["bytes"], 1536);
    assert_eq!(value["formatted"], "1.5 KB");

    docsize()
        .args(["--format", "records", "format-bytes", "2048"])
        .assert()
        .success()
        .stdout("B bytes=2048 formatted=\"2 KB\"\n");
}

#[test]
fn test_format_bytes_decimals_bounds() {
    docsize()
        .args(["format-bytes", "10", "--decimals", "21"])
        .assert()
        .code(2);

    docsize().args(["format-bytes", "-5"]).assert().code(2);
}

#[test]
fn test_format_bytes_config_decimals() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[format]\ndecimals = 3\n").unwrap();

    docsize()
        .arg("--config")
        .arg(&config)
        .args(["format-bytes", "1234567"])
        .assert()
        .success()
        .stdout("1.177 MB\n");
}
