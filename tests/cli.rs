//! Tests for the keysheet binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/kenkyo.kbd");

fn keysheet() -> Command {
    Command::cargo_bin("keysheet").expect("binary to build")
}

#[test]
fn writes_html_and_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("docs/kenkyo_layers.html");

    keysheet()
        .current_dir(dir.path())
        .arg(FIXTURE)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Wrote ").and(predicate::str::contains("kenkyo_layers.html")));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"<div class="layer-name">extend</div>"#));
}

#[test]
fn default_paths_are_relative_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(FIXTURE, dir.path().join("kenkyo.kbd")).unwrap();

    keysheet()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/kenkyo_layers.html"));

    assert!(dir.path().join("docs/kenkyo_layers.html").is_file());
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("keysheet.toml"),
        "output = \"sheet.html\"\nlayers = [\"fumbol\"]\n",
    )
    .unwrap();

    keysheet()
        .current_dir(dir.path())
        .arg(FIXTURE)
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("sheet.html")).unwrap();
    assert!(html.contains(">fumbol<"));
    assert!(!html.contains(">main<"));
}

#[test]
fn layer_flags_replace_configured_layers() {
    let dir = tempfile::tempdir().unwrap();

    keysheet()
        .current_dir(dir.path())
        .args([FIXTURE, "--format", "json", "-l", "extend", "-l", "main"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let value: serde_json::Value = serde_json::from_str(out).unwrap();
            value["layers"][0]["name"] == "extend"
                && value["layers"][1]["name"] == "main"
                && value["layers"].as_array().map(Vec::len) == Some(2)
        }));
}

#[test]
fn missing_layout_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.kbd");
    fs::write(&input, "(deflayer main a b c)\n").unwrap();

    keysheet()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Block not found: (defsrc"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    keysheet()
        .current_dir(dir.path())
        .arg("nope.kbd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.kbd"));
}

#[test]
fn short_layer_warns_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.kbd");
    fs::write(&input, "(defsrc\n a b c\n)\n(deflayer main\n x\n)\n").unwrap();

    keysheet()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("trailing rows are truncated"));
}
