#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sunpanel_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("sunpanel"));
    cmd.current_dir(root)
        .env("SUNPANEL_CONFIG_DIR", root.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn create_service(root: &Path, title: &str) {
    sunpanel_cmd(root)
        .args(["create", "services", "-f", &format!("title={}", title)])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Created in services: {}", title)));
}

fn listed_titles(root: &Path, collection: &str) -> Vec<String> {
    let output = sunpanel_cmd(root)
        .args(["list", collection, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    listed
        .as_array()
        .unwrap()
        .iter()
        .map(|dp| dp["record"]["fields"]["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_init_creates_data_dir() {
    let temp = TempDir::new().unwrap();

    sunpanel_cmd(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));
    assert!(temp.path().join(".sunpanel").is_dir());

    sunpanel_cmd(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_create_move_delete_workflow() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    for title in ["Rooftop", "Battery", "Chargers", "Audits"] {
        create_service(root, title);
    }

    sunpanel_cmd(root)
        .args(["up", "services", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved up: Chargers (3 -> 2)"));
    assert_eq!(
        listed_titles(root, "services"),
        vec!["Rooftop", "Chargers", "Battery", "Audits"]
    );

    sunpanel_cmd(root)
        .args(["delete", "services", "rooftop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted from services"));
    assert_eq!(
        listed_titles(root, "services"),
        vec!["Chargers", "Battery", "Audits"]
    );

    // Order values were closed up on disk.
    let raw = fs::read_to_string(root.join(".sunpanel").join("services.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let mut orders: Vec<u64> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["order_index"].as_u64().unwrap())
        .collect();
    orders.sort_unstable();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn test_boundary_move_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    create_service(temp.path(), "Rooftop");

    sunpanel_cmd(temp.path())
        .args(["down", "services", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at the bottom of services"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_required_field_fails() {
    let temp = TempDir::new().unwrap();

    sunpanel_cmd(temp.path())
        .args(["create", "testimonials", "-f", "author=Dana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("quote"));
}

#[test]
fn test_unknown_position_fails() {
    let temp = TempDir::new().unwrap();
    create_service(temp.path(), "Rooftop");

    sunpanel_cmd(temp.path())
        .args(["delete", "services", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Position 7 not found"));
}

#[test]
fn test_data_flag_and_walk_up() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("site");
    let nested = site.join("assets").join("img");
    fs::create_dir_all(&nested).unwrap();

    sunpanel_cmd(temp.path())
        .args(["--data", site.to_str().unwrap(), "init"])
        .assert()
        .success();
    assert!(site.join(".sunpanel").is_dir());

    // From deep inside the site the existing data dir is found.
    create_service(&nested, "Rooftop");
    assert!(site.join(".sunpanel").join("services.json").exists());
}

#[test]
fn test_doctor_fix_repairs_order() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join(".sunpanel");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("services.json"),
        r#"[
          {"id": "0b7c2f9e-1111-4c1a-8b6e-000000000001", "order_index": 5,
           "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z",
           "fields": {"title": "Battery"}},
          {"id": "0b7c2f9e-1111-4c1a-8b6e-000000000002", "order_index": 2,
           "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z",
           "fields": {"title": "Rooftop"}}
        ]"#,
    )
    .unwrap();

    sunpanel_cmd(temp.path())
        .args(["doctor", "services"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing order values: 0, 1, 3, 4"));

    sunpanel_cmd(temp.path())
        .args(["doctor", "services", "--fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renumbered 2 record(s)"));

    sunpanel_cmd(temp.path())
        .args(["doctor", "services"])
        .assert()
        .success()
        .stdout(predicate::str::contains("order is healthy"));
    assert_eq!(listed_titles(temp.path(), "services"), vec!["Rooftop", "Battery"]);
}

#[test]
fn test_default_collection_from_config() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join(".sunpanel");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("sunpanel.toml"),
        "default_collection = \"hero-slides\"\n",
    )
    .unwrap();

    sunpanel_cmd(temp.path())
        .args(["create", "hero-slides", "-f", "title=Go solar"])
        .assert()
        .success();

    sunpanel_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Go solar"));
}

#[test]
fn test_collections_lists_every_collection() {
    let temp = TempDir::new().unwrap();
    create_service(temp.path(), "Rooftop");

    sunpanel_cmd(temp.path())
        .arg("collections")
        .assert()
        .success()
        .stdout(predicate::str::contains("services"))
        .stdout(predicate::str::contains("footer-links"));
}

#[test]
fn test_oversized_range_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    create_service(temp.path(), "Rooftop");

    sunpanel_cmd(temp.path())
        .args(["delete", "services", "1-18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Position 18446744073709551615 not found"));
    assert_eq!(listed_titles(temp.path(), "services"), vec!["Rooftop"]);
}
