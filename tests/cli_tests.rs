//! CLI integration tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn settings_bin(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("settings-ini").expect("binary should be built");
    cmd.env_remove("SETTINGS_INI_FILE")
        .arg("--no-color")
        .arg("--file")
        .arg(file);
    cmd
}

#[test]
fn help_output() {
    Command::cargo_bin("settings-ini")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("section"))
        .stdout(predicate::str::contains("--file"));
}

#[test]
fn version_output() {
    Command::cargo_bin("settings-ini")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn path_command_uses_env() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("from-env.ini");

    Command::cargo_bin("settings-ini")
        .unwrap()
        .env("SETTINGS_INI_FILE", &file)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env.ini"));

    // Nothing was loaded, so nothing is written
    assert!(!file.exists());
}

#[test]
fn set_then_get_integer() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["set", "net", "port", "8080", "--type", "u16"])
        .assert()
        .success();

    settings_bin(&file)
        .args(["get", "net", "port", "--type", "u16"])
        .assert()
        .success()
        .stdout("8080\n");

    assert_eq!(fs::read_to_string(&file).unwrap(), "[net]\nport = 8080\n");
}

#[test]
fn get_writes_back_default() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["get", "ui", "scale", "--type", "s32", "--default", "-3"])
        .assert()
        .success()
        .stdout("-3\n");

    assert_eq!(fs::read_to_string(&file).unwrap(), "[ui]\nscale = -3\n");
}

#[test]
fn negative_value_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["set", "ui", "offset", "-12", "--type", "s16"])
        .assert()
        .success();

    settings_bin(&file)
        .args(["get", "ui", "offset", "--type", "s16", "-d", "-1"])
        .assert()
        .success()
        .stdout("-12\n");
}

#[test]
fn hex_get_does_not_write_back() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["get", "test-Sec2", "test-key2", "--type", "hex", "--default", "0xFAFAFAFAFAFAFAFA"])
        .assert()
        .success()
        .stdout("0xfafafafafafafafa\n");

    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn hex_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["set", "test-Sec", "test-key", "0xFFFFFFFFFFFFFFFF", "--type", "hex"])
        .assert()
        .success();

    settings_bin(&file)
        .args(["get", "test-Sec", "test-key", "--type", "hex"])
        .assert()
        .success()
        .stdout("0xffffffffffffffff\n");
}

#[test]
fn out_of_range_set_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["set", "a", "k", "300", "--type", "s8"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value"));

    assert!(!file.exists());
}

#[test]
fn narrow_get_of_wide_value_returns_default() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");
    fs::write(&file, "[a]\nk = 300\n").unwrap();

    settings_bin(&file)
        .args(["get", "a", "k", "--type", "s8", "--default", "5"])
        .assert()
        .success()
        .stdout("5\n");

    assert_eq!(fs::read_to_string(&file).unwrap(), "[a]\nk = 300\n");
}

#[test]
fn missing_string_without_default_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["get", "a", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Key not found"));
}

#[test]
fn empty_string_set_removes_key() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");
    fs::write(&file, "[a]\nk = v\nj = w\n").unwrap();

    settings_bin(&file)
        .args(["set", "a", "k", ""])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "[a]\nj = w\n");
}

#[test]
fn section_dump_lists_entries() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");
    fs::write(&file, "[a]\nx = 1\ny = two\n").unwrap();

    settings_bin(&file)
        .args(["section", "dump", "a"])
        .assert()
        .success()
        .stdout("x=1\ny=two\n");
}

#[test]
fn section_dump_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");
    fs::write(&file, "[a]\nx = 1\n").unwrap();

    let output = settings_bin(&file)
        .args(["section", "dump", "a", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "a");
    assert_eq!(json["entries"][0]["key"], "x");
    assert_eq!(json["entries"][0]["value"], "1");
}

#[test]
fn section_dump_missing_section_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["section", "dump", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Section not found"));
}

#[test]
fn section_clear_then_remove() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");
    fs::write(&file, "[a]\nx = 1\ny = 2\n\n[b]\nz = 3\n").unwrap();

    settings_bin(&file)
        .args(["section", "clear", "a"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "[a]\n\n[b]\nz = 3\n");

    settings_bin(&file)
        .args(["section", "dump", "a"])
        .assert()
        .success()
        .stdout("");

    settings_bin(&file)
        .args(["section", "remove", "a"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "[b]\nz = 3\n");
}

#[test]
fn section_create_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["section", "create", "fresh"])
        .assert()
        .success();

    settings_bin(&file)
        .args(["sections", "--json"])
        .assert()
        .success()
        .stdout("[\"fresh\"]\n");
}

#[test]
fn unset_removes_key() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");
    fs::write(&file, "[a]\nx = 1\n").unwrap();

    settings_bin(&file)
        .args(["unset", "a", "x"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "[a]\n");
}

#[test]
fn unknown_type_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");

    settings_bin(&file)
        .args(["get", "a", "k", "--type", "f32"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown value type"));
}

#[test]
fn key_with_equals_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");
    fs::write(&file, "[a]\nx = 1\n").unwrap();

    settings_bin(&file)
        .args(["set", "a", "k=x", "v"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid name"));

    settings_bin(&file)
        .args(["set", "a", "; k", "v"])
        .assert()
        .code(2);

    assert_eq!(fs::read_to_string(&file).unwrap(), "[a]\nx = 1\n");
}

#[test]
fn sections_plain_and_json_agree() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.ini");
    fs::write(&file, "top = 1\n\n[a]\nk = v\n").unwrap();

    settings_bin(&file)
        .arg("sections")
        .assert()
        .success()
        .stdout("[]\n[a]\n");

    settings_bin(&file)
        .args(["sections", "--json"])
        .assert()
        .success()
        .stdout("[\"\",\"a\"]\n");
}
