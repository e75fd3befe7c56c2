use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for docsize that ignores the user's global configuration
pub fn docsize() -> Command {
    let mut cmd = cargo_bin_cmd!("docsize");
    cmd.env_remove("DOCSIZE_CONFIG")
        .env_remove("DOCSIZE_LOG")
        .env(
            "DOCSIZE_CONFIG_DIR",
            std::env::temp_dir().join("docsize-tests-no-global-config"),
        );
    cmd
}

/// Write the example schema into `dir` and return its path
pub fn init_schema(dir: &Path) -> PathBuf {
    let path = dir.join("docsize.toml");
    docsize()
        .arg("init")
        .arg(&path)
        .assert()
        .success();
    path
}

/// Write raw schema text into `dir` under `name`
pub fn write_schema(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
