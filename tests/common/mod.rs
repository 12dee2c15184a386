#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn travelog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("travelog").unwrap();
    cmd.env_remove("TRAVELOG_ROOT");
    cmd.env_remove("TRAVELOG_LOG");
    cmd
}

/// Run `travelog add` in `dir` and return the new entry id
pub fn add_entry(dir: &Path, args: &[&str]) -> String {
    let output = travelog_cmd()
        .current_dir(dir)
        .arg("add")
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Added entry ")
        .expect("unexpected add output")
        .to_string()
}
