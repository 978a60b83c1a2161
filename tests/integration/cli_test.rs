//! CLI behavior tests
//!
//! Runs the idmin binary against local fixtures: output files, listing
//! tables, error reporting, and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn idmin() -> Command {
    Command::cargo_bin("idmin").expect("binary builds")
}

/// Write a small self-contained page into `dir` and return the page path.
fn write_page_fixture(dir: &TempDir) -> std::path::PathBuf {
    let page_path = dir.path().join("page.html");
    fs::write(
        &page_path,
        concat!(
            r#"<link rel="stylesheet" href="site.css">"#,
            "\n",
            r#"<div id="page-root" class="btn-primary plain"></div>"#,
            "\n",
            r#"<script src="app.js"></script>"#,
            "\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.path().join("site.css"),
        ".btn-primary { color: red; }\n#page-root { margin: 0; }\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("app.js"),
        "document.querySelector('.btn-primary');\n",
    )
    .unwrap();
    page_path
}

#[test]
fn minify_local_writes_rewritten_outputs() {
    let dir = TempDir::new().unwrap();
    let page_path = write_page_fixture(&dir);
    let out_dir = dir.path().join("out");

    idmin()
        .args(["minify", "--local", "--output"])
        .arg(&out_dir)
        .arg(&page_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let html = fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(!html.contains("btn-primary"));
    assert!(!html.contains("page-root"));
    assert!(html.contains(r#"href="./index.css""#));
    assert!(html.contains(r#"src="./app.min.js""#));

    let css = fs::read_to_string(out_dir.join("index.css")).unwrap();
    assert_eq!(css, ".bp{color:red}#pr{margin:0}");

    let script = fs::read_to_string(out_dir.join("app.min.js")).unwrap();
    assert!(!script.contains("btn-primary"));
}

#[test]
fn minify_local_writes_manifest() {
    let dir = TempDir::new().unwrap();
    let page_path = write_page_fixture(&dir);
    let out_dir = dir.path().join("out");

    idmin()
        .args(["minify", "--local", "--output"])
        .arg(&out_dir)
        .arg(&page_path)
        .assert()
        .success();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["classes"][0]["original"], "btn-primary");
    assert_eq!(manifest["classes"][0]["alias"], "bp");
    assert_eq!(manifest["ids"][0]["original"], "page-root");
    assert_eq!(manifest["scripts"][0]["file"], "app.min.js");
}

#[test]
fn list_classes_prints_alias_table() {
    let dir = TempDir::new().unwrap();
    let page_path = write_page_fixture(&dir);
    let out_dir = dir.path().join("out");

    idmin()
        .args(["minify", "--local", "--list-classes", "--output"])
        .arg(&out_dir)
        .arg(&page_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Classes (2)"))
        .stdout(predicate::str::contains("Original"))
        .stdout(predicate::str::contains("btn-primary"))
        .stdout(predicate::str::contains("bp"));
}

#[test]
fn list_ids_prints_alias_table() {
    let dir = TempDir::new().unwrap();
    let page_path = write_page_fixture(&dir);
    let out_dir = dir.path().join("out");

    idmin()
        .args(["minify", "--local", "--list-ids", "--output"])
        .arg(&out_dir)
        .arg(&page_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ids (1)"))
        .stdout(predicate::str::contains("page-root"));
}

#[test]
fn invalid_url_fails_with_message() {
    idmin()
        .args(["minify", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid URL"));
}

#[test]
fn missing_local_page_fails_with_message() {
    idmin()
        .args(["minify", "--local", "/nonexistent/page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read local page"));
}

#[test]
fn page_without_identifiers_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let page_path = dir.path().join("plain.html");
    fs::write(&page_path, "<p>nothing here</p>").unwrap();
    let out_dir = dir.path().join("out");

    idmin()
        .args(["minify", "--local", "--output"])
        .arg(&out_dir)
        .arg(&page_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No class or id identifiers found"));

    assert_eq!(
        fs::read_to_string(out_dir.join("index.html")).unwrap(),
        "<p>nothing here</p>"
    );
}

#[test]
fn config_path_prints_config_location() {
    idmin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("idmin"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_emit_shell_script() {
    idmin()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("idmin"));
}
