//! End-to-end tests of the mdhtml binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mdhtml() -> Command {
    Command::cargo_bin("mdhtml").unwrap()
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_convert_writes_page() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.md", "# Hello\n\n* one\n* two\n");
    let output = dir.path().join("out.html");

    mdhtml()
        .args(["convert", &input, output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("<title>Hello</title>"));
    assert!(page.contains("    <ul>\n        <li>one</li>\n        <li>two</li>\n    </ul>"));
}

#[test]
fn test_parse_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.md", "**unterminated\n");
    let output = dir.path().join("out.html");

    mdhtml()
        .args(["convert", &input, output.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse error at line 1"));

    assert!(!output.exists());
}

#[test]
fn test_unknown_renderer() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.md", "text\n");
    let output = dir.path().join("out.pdf");

    mdhtml()
        .args(["convert", &input, output.to_str().unwrap(), "-r", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'pdf'"));
}

#[test]
fn test_custom_template() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.md", "# T\n");
    let template = write(&dir, "page.html", "[$title]\n${content}\n");
    let output = dir.path().join("out.html");

    mdhtml()
        .args([
            "convert",
            &input,
            output.to_str().unwrap(),
            "--template",
            &template,
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "[T]\n    <h1>T</h1>\n"
    );
}

#[test]
fn test_config_file_renames() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.md", "> quoted\n");
    let config = write(
        &dir,
        "mdhtml.toml",
        "[html]\ntitle_fallback = \"Untitled\"\n\n[html.tag_renames]\nquote = \"aside\"\n",
    );
    let output = dir.path().join("out.html");

    mdhtml()
        .args([
            "convert",
            &input,
            output.to_str().unwrap(),
            "--config",
            &config,
        ])
        .assert()
        .success();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("<title>Untitled</title>"));
    assert!(page.contains("<aside>"));
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.html");

    mdhtml()
        .args(["convert", "/nonexistent/in.md", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn test_inspect_json() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.md", "* a\n");

    mdhtml()
        .args(["inspect", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\": \"ul\""))
        .stdout(predicate::str::contains("\"tag\": \"li\""));
}

#[test]
fn test_inspect_yaml() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.md", "## Sub\n");

    mdhtml()
        .args(["inspect", &input, "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tag: h2"))
        .stdout(predicate::str::contains("text: Sub"));
}

#[test]
fn test_formats() {
    mdhtml()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("html"));
}

#[test]
fn test_requires_subcommand() {
    mdhtml().assert().failure();
}

#[test]
fn test_malformed_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "in.md", "# T\n");
    let config = write(&dir, "mdhtml.toml", "[html\ntitle_fallback = \n");
    let output = dir.path().join("out.html");

    mdhtml()
        .args([
            "convert",
            &input,
            output.to_str().unwrap(),
            "--config",
            &config,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration: invalid configuration"));
    assert!(!output.exists());
}
