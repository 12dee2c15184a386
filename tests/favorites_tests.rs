//! Integration tests for save, like and share commands

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
fn test_save_toggles() {
    let temp = init_diary();
    let id = add_entry(temp.path(), &["a.jpg", "-a", "Hallstatt, Austria"]);

    travelog_cmd()
        .current_dir(temp.path())
        .args(["save", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to favorites"));

    travelog_cmd()
        .current_dir(temp.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hallstatt, Austria"))
        .stdout(predicate::str::contains("saved "));

    travelog_cmd()
        .current_dir(temp.path())
        .args(["save", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from favorites"));

    travelog_cmd()
        .current_dir(temp.path())
        .arg("saved")
        .assert()
        .success()
        .stdout("No saved entries\n");
}

#[test]
fn test_save_unknown_entry() {
    let temp = init_diary();

    travelog_cmd()
        .current_dir(temp.path())
        .args(["save", "404"])
        .assert()
        .code(3);
}

#[test]
fn test_saved_snapshot_outlives_entry() {
    let temp = init_diary();
    let id = add_entry(temp.path(), &["a.jpg", "-a", "Cinque Terre"]);

    travelog_cmd()
        .current_dir(temp.path())
        .args(["save", &id])
        .assert()
        .success();
    travelog_cmd()
        .current_dir(temp.path())
        .args(["remove", &id])
        .assert()
        .success();

    travelog_cmd()
        .current_dir(temp.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinque Terre"));

    travelog_cmd()
        .current_dir(temp.path())
        .args(["unsave", &id])
        .assert()
        .success();

    travelog_cmd()
        .current_dir(temp.path())
        .args(["unsave", &id])
        .assert()
        .code(3);
}

#[test]
fn test_saved_sorted_by_travel_time() {
    let temp = init_diary();
    let store = temp.path().join(".travelog/store");
    fs::write(
        store.join("travel_entries.json"),
        r#"[
            {"id":"t2","imageUris":["2.jpg"],"address":"Second","timestamp":"2024-05-02 08:00:00","location":null},
            {"id":"t1","imageUris":["1.jpg"],"address":"First","timestamp":"2024-05-01 08:00:00","location":null},
            {"id":"t3","imageUris":["3.jpg"],"address":"Third","timestamp":"2024-05-03 08:00:00","location":null}
        ]"#,
    )
    .unwrap();

    for id in ["t2", "t1", "t3"] {
        travelog_cmd()
            .current_dir(temp.path())
            .args(["save", id])
            .assert()
            .success();
    }

    let output = travelog_cmd()
        .current_dir(temp.path())
        .arg("saved")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["t3", "t2", "t1"]);

    let raw = fs::read_to_string(store.join("savedPosts.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["id"], "t3");
    assert_eq!(json[1]["id"], "t1");
    assert_eq!(json[2]["id"], "t2");
    assert!(json[0]["savedAt"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_like_toggles_and_lists() {
    let temp = init_diary();
    let id = add_entry(temp.path(), &["a.jpg", "-a", "Reykjavik"]);

    travelog_cmd()
        .current_dir(temp.path())
        .args(["like", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Liked"));

    travelog_cmd()
        .current_dir(temp.path())
        .arg("liked")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reykjavik"));

    travelog_cmd()
        .current_dir(temp.path())
        .args(["like", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unliked"));

    let raw = fs::read_to_string(temp.path().join(".travelog/store/likedPosts.json")).unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn test_list_shows_markers() {
    let temp = init_diary();
    let id = add_entry(temp.path(), &["a.jpg", "-a", "Kotor"]);

    travelog_cmd()
        .current_dir(temp.path())
        .args(["like", &id])
        .assert()
        .success();
    travelog_cmd()
        .current_dir(temp.path())
        .args(["save", &id])
        .assert()
        .success();

    travelog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("♥★  Kotor"));
}

#[test]
fn test_share_message() {
    let temp = init_diary();
    let id = add_entry(temp.path(), &["a.jpg", "-a", "Bled, Slovenia", "-d", "Island church"]);

    travelog_cmd()
        .current_dir(temp.path())
        .args(["share", &id])
        .assert()
        .success()
        .stdout(
            "Check out this location from my travel diary: Bled, Slovenia\n\nIsland church\n",
        );
}

#[test]
fn test_share_unknown_entry() {
    let temp = init_diary();

    travelog_cmd()
        .current_dir(temp.path())
        .args(["share", "nope"])
        .assert()
        .code(3);
}
