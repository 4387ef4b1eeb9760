//! End-to-end tests for the stylecomb binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stylecomb_cmd() -> Command {
    Command::cargo_bin("stylecomb").expect("stylecomb binary not built")
}

/// Writes a config file into the temp dir and returns its path, so the
/// upward dotfile discovery never reaches the developer's own config.
fn write_config(temp: &TempDir, json: &str) -> PathBuf {
    let path = temp.path().join("config.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn no_paths_is_an_error() {
    stylecomb_cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No input paths"));
}

#[test]
fn version_flag_prints_and_exits() {
    stylecomb_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stylecomb"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a.css");
    fs::write(&file, "a{color:red}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(temp.path().join("nope.json"))
        .arg(&file)
        .assert()
        .failure()
        .code(1);
}

#[test]
fn rewrites_files_in_place() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, r#"{ "always-semicolon": true }"#);
    let file = temp.path().join("a.css");
    fs::write(&file, "a{color:red}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "a{color:red;}");
}

#[test]
fn block_indent_opens_blocks() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, r#"{ "block-indent": 3 }"#);
    let file = temp.path().join("a.css");
    fs::write(&file, "a{color:red}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "a{\n   color:red\n}");
}

#[test]
fn invalid_option_value_warns_and_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, r#"{ "block-indent": 3.5 }"#);
    let file = temp.path().join("a.css");
    fs::write(&file, "a{color:red}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("block-indent"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "a{color:red}");
}

#[test]
fn lint_mode_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, r#"{ "always-semicolon": true }"#);
    let file = temp.path().join("a.css");
    fs::write(&file, "a{color:red}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg("--lint")
        .arg(&file)
        .assert()
        .failure()
        .code(1);

    assert_eq!(fs::read_to_string(&file).unwrap(), "a{color:red}");
}

#[test]
fn lint_mode_passes_on_clean_trees() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, r#"{ "always-semicolon": true }"#);
    let file = temp.path().join("a.css");
    fs::write(&file, "a{color:red;}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg("--lint")
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn directories_are_walked_recursively() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, r#"{ "always-semicolon": true }"#);
    let sub = temp.path().join("nested");
    fs::create_dir(&sub).unwrap();
    fs::write(temp.path().join("a.css"), "a{color:red}").unwrap();
    fs::write(sub.join("b.less"), "b{color:blue}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("a.css")).unwrap(),
        "a{color:red;}"
    );
    assert_eq!(
        fs::read_to_string(sub.join("b.less")).unwrap(),
        "b{color:blue;}"
    );
}

#[test]
fn excluded_subtrees_are_skipped() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        &temp,
        r#"{ "always-semicolon": true, "exclude": ["**/vendor/**", "**/vendor"] }"#,
    );
    let vendor = temp.path().join("vendor");
    fs::create_dir(&vendor).unwrap();
    fs::write(vendor.join("lib.css"), "a{color:red}").unwrap();
    fs::write(temp.path().join("app.css"), "a{color:red}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(vendor.join("lib.css")).unwrap(),
        "a{color:red}"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("app.css")).unwrap(),
        "a{color:red;}"
    );
}

#[test]
fn parse_errors_fail_the_run_but_not_the_siblings() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, r#"{ "always-semicolon": true }"#);
    fs::write(temp.path().join("good.css"), "a{color:red}").unwrap();
    fs::write(temp.path().join("bad.css"), "a{color:red").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bad.css"));

    assert_eq!(
        fs::read_to_string(temp.path().join("good.css")).unwrap(),
        "a{color:red;}"
    );
}

#[test]
fn missing_root_fails_the_run() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "{}");

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg(temp.path().join("ghost"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn verbose_prints_a_summary() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, r#"{ "always-semicolon": true }"#);
    let file = temp.path().join("a.css");
    fs::write(&file, "a{color:red}").unwrap();

    stylecomb_cmd()
        .arg("-c")
        .arg(&config)
        .arg("-v")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file processed"))
        .stdout(predicate::str::contains("1 file fixed"));
}
