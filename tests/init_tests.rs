//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_places, places_cmd};

#[test]
fn test_init_creates_config_and_store() {
    let temp = TempDir::new().unwrap();

    places_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized places"));

    assert!(temp.path().join(".places").is_dir());
    assert!(temp.path().join(".places/pins.toml").exists());

    let content = fs::read_to_string(temp.path().join(".places/config.toml")).unwrap();
    assert!(content.contains("map_type = \"standard\""));
    assert!(content.contains("span = 10.0"));
}

#[test]
fn test_init_with_map_type() {
    let temp = TempDir::new().unwrap();

    places_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--map-type")
        .arg("satellite")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".places/config.toml")).unwrap();
    assert!(content.contains("map_type = \"satellite\""));
}

#[test]
fn test_init_invalid_map_type_fails() {
    let temp = TempDir::new().unwrap();

    places_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--map-type")
        .arg("terrain")
        .assert()
        .failure()
        .stderr(predicate::str::contains("standard, satellite, hybrid"));

    assert!(!temp.path().join(".places").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_places(temp.path());
    places_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_command_outside_workspace_fails() {
    let temp = TempDir::new().unwrap();

    places_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("places init"));
}

#[test]
fn test_places_root_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_places(temp.path());

    places_cmd()
        .current_dir(elsewhere.path())
        .env("PLACES_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pins saved"));
}

#[test]
fn test_config_get_and_set_map_type() {
    let temp = TempDir::new().unwrap();
    init_places(temp.path());

    places_cmd()
        .current_dir(temp.path())
        .args(["config", "map_type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"));

    places_cmd()
        .current_dir(temp.path())
        .args(["config", "map_type", "hybrid"])
        .assert()
        .success();

    places_cmd()
        .current_dir(temp.path())
        .args(["config", "map_type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hybrid"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_places(temp.path());

    places_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("map_type = standard"))
        .stdout(predicate::str::contains("span = 10"))
        .stdout(predicate::str::contains("created"));
}

#[test]
fn test_config_set_created_fails() {
    let temp = TempDir::new().unwrap();
    init_places(temp.path());

    places_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}
