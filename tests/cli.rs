use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("pax-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("pax-cli")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pax-cli"));
}

#[test]
fn export_rejects_item_scope_without_id() {
    let temp_dir = tempdir().unwrap();
    Command::cargo_bin("pax-cli")
        .unwrap()
        .args(["--config-dir", temp_dir.path().to_str().unwrap()])
        .args(["export", "--scope", "item"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scope=item"));
}

#[test]
fn export_rejects_unknown_scope() {
    Command::cargo_bin("pax-cli")
        .unwrap()
        .args(["export", "--scope", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn export_rejects_unknown_language() {
    Command::cargo_bin("pax-cli")
        .unwrap()
        .args(["export", "--lang", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn config_show_reports_missing_configuration() {
    let temp_dir = tempdir().unwrap();
    Command::cargo_bin("pax-cli")
        .unwrap()
        .args(["--config-dir", temp_dir.path().to_str().unwrap()])
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No configuration found"));
}

#[test]
fn config_show_prints_existing_configuration() {
    let temp_dir = tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "base_url = \"https://shop.example.test\"\nattribute_ids = [1, 3]\nprimary_market_id = 104\nalternative_market_id = 4\n",
    )
    .unwrap();

    Command::cargo_bin("pax-cli")
        .unwrap()
        .args(["--config-dir", temp_dir.path().to_str().unwrap()])
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://shop.example.test"))
        .stdout(predicate::str::contains("104"));
}
