use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Copies the fixture restaurant file into a fresh temp dir.
fn setup() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("restaurants.txt");
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("restaurants.txt");
    std::fs::copy(fixture, &data_file).unwrap();
    (temp_dir, data_file)
}

fn guide(temp_dir: &TempDir, data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("food-finder").unwrap();
    cmd.arg("--file")
        .arg(data_file)
        .arg("--config-dir")
        .arg(temp_dir.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_welcome_and_quit() {
    let (temp_dir, data_file) = setup();

    guide(&temp_dir, &data_file)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<<< Welcome to the Food Finder >>>"))
        .stdout(predicate::str::contains("Actions: list, find, add, quit"))
        .stdout(predicate::str::contains("<<< Goodbye and Bon Appetit! >>>"));
}

#[test]
fn test_end_of_input_says_goodbye() {
    let (temp_dir, data_file) = setup();

    guide(&temp_dir, &data_file)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("<<< Goodbye and Bon Appetit! >>>"));
}

#[test]
fn test_list_sorted_by_price() {
    let (temp_dir, data_file) = setup();

    let output = guide(&temp_dir, &data_file)
        .write_stdin("list price\nquit\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let order: Vec<usize> = ["Pita Pocket", "Quick Cup", "Taste Of Little Italy", "Hot Tamale"]
        .iter()
        .map(|name| stdout.find(name).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
    assert!(stdout.contains("$5.00"));
    assert!(stdout.contains("LISTING RESTAURANTS"));
}

#[test]
fn test_find_by_price() {
    let (temp_dir, data_file) = setup();

    guide(&temp_dir, &data_file)
        .write_stdin("find 10\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pita Pocket"))
        .stdout(predicate::str::contains("Quick Cup"))
        .stdout(predicate::str::contains("Hot Tamale").not())
        .stdout(predicate::str::contains("Moonstruck Diner").not());
}

#[test]
fn test_find_nothing() {
    let (temp_dir, data_file) = setup();

    guide(&temp_dir, &data_file)
        .write_stdin("find sushi\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No listings found"));
}

#[test]
fn test_add_persists_to_file() {
    let (temp_dir, data_file) = setup();

    guide(&temp_dir, &data_file)
        .write_stdin("add\nCrescent\npaleo\n321\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restaurant Added"));

    let content = std::fs::read_to_string(&data_file).unwrap();
    assert!(content.ends_with("Crescent\tpaleo\t321\n"));

    // Visible on the next run
    guide(&temp_dir, &data_file)
        .write_stdin("find crescent\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crescent"))
        .stdout(predicate::str::contains("$321.00"));
}

#[test]
fn test_add_invalid_is_not_saved() {
    let (temp_dir, data_file) = setup();
    let before = std::fs::read_to_string(&data_file).unwrap();

    guide(&temp_dir, &data_file)
        .write_stdin("add\nNowhere\nthai\ncheap\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Save Error: Restaurant not added"));

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), before);
}

#[test]
fn test_unknown_action() {
    let (temp_dir, data_file) = setup();

    guide(&temp_dir, &data_file)
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action not recognized."));
}

#[test]
fn test_missing_file_is_created() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("fresh.txt");

    guide(&temp_dir, &data_file)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not usable").not())
        .stdout(predicate::str::contains("No listings found"));

    assert!(data_file.exists());
}

#[test]
fn test_unusable_file_keeps_running() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("missing-dir").join("restaurants.txt");

    guide(&temp_dir, &data_file)
        .write_stdin("list\nadd\nCrescent\npaleo\n321\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restaurant file not usable"))
        .stdout(predicate::str::contains("No listings found"))
        .stdout(predicate::str::contains("Save Error: Restaurant not added"));

    assert!(!data_file.exists());
}

#[test]
fn test_first_run_writes_default_config() {
    let (temp_dir, data_file) = setup();
    let config_file = temp_dir.path().join("config").join("config.json");
    assert!(!config_file.exists());

    guide(&temp_dir, &data_file)
        .write_stdin("quit\n")
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_file).unwrap();
    assert!(content.contains("\"currency\""));
    assert!(content.contains("\"unit\": \"$\""));
}

#[test]
fn test_config_currency_is_applied() {
    let (temp_dir, data_file) = setup();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        r#"{ "currency": { "unit": "€", "precision": 0 } }"#,
    )
    .unwrap();

    guide(&temp_dir, &data_file)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("€30"))
        .stdout(predicate::str::contains("$30.00").not());
}

#[test]
fn test_invalid_config_fails() {
    let (temp_dir, data_file) = setup();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{ nope").unwrap();

    guide(&temp_dir, &data_file)
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
