//! Integration tests for add, list and remove commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_entry, travelog_cmd};

fn init_diary() -> TempDir {
    let temp = TempDir::new().unwrap();
    travelog_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_list_no_entries() {
    let temp = init_diary();

    travelog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No entries found\n");
}

#[test]
fn test_add_and_list() {
    let temp = init_diary();

    let id = add_entry(
        temp.path(),
        &["beach.jpg", "dunes.jpg", "-d", "Windy afternoon", "-a", "Essaouira, Morocco"],
    );

    travelog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("Essaouira, Morocco (2 photos)"))
        .stdout(predicate::str::contains("    Windy afternoon"));
}

#[test]
fn test_add_writes_entries_blob() {
    let temp = init_diary();
    let id = add_entry(temp.path(), &["a.jpg"]);

    let raw = fs::read_to_string(temp.path().join(".travelog/store/travel_entries.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["id"], id.as_str());
    assert_eq!(json[0]["imageUris"][0], "a.jpg");
    assert_eq!(json[0]["address"], "");
    assert!(json[0]["location"].is_null());
}

#[test]
fn test_add_with_coordinates_uses_fallback_address() {
    let temp = init_diary();
    add_entry(temp.path(), &["a.jpg", "--lat", "12.345678", "--lon", "98.765432"]);

    travelog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12.345678, 98.765432"));
}

#[test]
fn test_add_accepts_negative_coordinates() {
    let temp = init_diary();
    add_entry(temp.path(), &["a.jpg", "--lat", "-33.8568", "--lon", "151.2153"]);

    travelog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("-33.856800, 151.215300"));
}

#[test]
fn test_add_without_photos_fails() {
    let temp = init_diary();

    travelog_cmd()
        .current_dir(temp.path())
        .arg("add")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("at least one photo"));

    assert!(!temp.path().join(".travelog/store/travel_entries.json").exists());
}

#[test]
fn test_add_respects_max_photos() {
    let temp = init_diary();
    travelog_cmd()
        .current_dir(temp.path())
        .args(["config", "max_photos", "2"])
        .assert()
        .success();

    travelog_cmd()
        .current_dir(temp.path())
        .args(["add", "1.jpg", "2.jpg", "3.jpg"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("up to 2 photos"));
}

#[test]
fn test_add_rejects_bad_latitude() {
    let temp = init_diary();

    travelog_cmd()
        .current_dir(temp.path())
        .args(["add", "a.jpg", "--lat", "95", "--lon", "10"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid location"));
}

#[test]
fn test_add_notifies_unless_disabled() {
    let temp = init_diary();

    travelog_cmd()
        .current_dir(temp.path())
        .args(["add", "a.jpg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("New Travel Entry Added!"));

    travelog_cmd()
        .current_dir(temp.path())
        .args(["config", "notifications", "off"])
        .assert()
        .success();

    travelog_cmd()
        .current_dir(temp.path())
        .args(["add", "b.jpg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("New Travel Entry Added!").not());
}

#[test]
fn test_list_newest_first() {
    let temp = init_diary();
    let first = add_entry(temp.path(), &["a.jpg", "-a", "First stop"]);
    let second = add_entry(temp.path(), &["b.jpg", "-a", "Second stop"]);

    let output = travelog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&second));
    assert!(lines[1].starts_with(&first));
}

#[test]
fn test_remove_entry() {
    let temp = init_diary();
    let id = add_entry(temp.path(), &["a.jpg"]);

    travelog_cmd()
        .current_dir(temp.path())
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));

    travelog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No entries found\n");
}

#[test]
fn test_remove_unknown_entry() {
    let temp = init_diary();

    travelog_cmd()
        .current_dir(temp.path())
        .args(["remove", "12345"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("travelog list"));
}

#[test]
fn test_corrupt_entries_blob_lists_empty() {
    let temp = init_diary();
    fs::write(
        temp.path().join(".travelog/store/travel_entries.json"),
        "[{\"id\": \"1\", \"imageUris\"",
    )
    .unwrap();

    travelog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No entries found\n");
}
