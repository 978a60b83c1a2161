//! End-to-end engine runs over realistic page fixtures
//!
//! Gathers assets from disk the way `--local` mode does, runs the engine,
//! and checks the assembled outputs.

use std::fs;

use tempfile::TempDir;

use idmin::{Engine, PageSource};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<link rel="stylesheet" href="main.css">
<link rel="stylesheet" href="extra.css">
</head>
<body>
<div id="page-root" class="container">
  <nav class="navbar">
    <a class="btn btn-primary" id="cta">Start</a>
  </nav>
  <div class="js-hook container"></div>
</div>
<script src="app.js"></script>
</body>
</html>
"#;

const MAIN_CSS: &str = r#"
/* layout */
.container { margin: 0 auto; }
.navbar    { display: flex; }
.btn       { padding: 4px;  }
"#;

const EXTRA_CSS: &str = r#"
.btn-primary { color: white; }
.btn-primary { color: red; }
#page-root   { width: 100%; }
#cta         { font-weight: bold; }
"#;

const APP_JS: &str = r#"document.querySelector(".btn-primary").id = "cta";"#;

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let page_path = dir.path().join("index.html");
    fs::write(&page_path, PAGE).unwrap();
    fs::write(dir.path().join("main.css"), MAIN_CSS).unwrap();
    fs::write(dir.path().join("extra.css"), EXTRA_CSS).unwrap();
    fs::write(dir.path().join("app.js"), APP_JS).unwrap();
    page_path
}

fn run_fixture() -> idmin::MinifiedPage {
    let dir = TempDir::new().unwrap();
    let page_path = write_fixture(&dir);
    let html = fs::read_to_string(&page_path).unwrap();
    let source = PageSource::gather_local(html, &page_path);
    Engine::run(&source)
}

#[test]
fn no_original_identifier_survives_in_the_markup() {
    let result = run_fixture();
    for token in [
        "container",
        "navbar",
        "btn-primary",
        "js-hook",
        "page-root",
        "cta",
    ] {
        assert!(
            !result.html.contains(token),
            "{:?} survived: {}",
            token,
            result.html
        );
    }
}

#[test]
fn stylesheets_collapse_into_one_local_link() {
    let result = run_fixture();
    assert!(result.html.contains(r#"href="./index.css""#));
    assert!(!result.html.contains("main.css"));
    assert!(!result.html.contains("extra.css"));
}

#[test]
fn css_rules_are_extracted_under_aliases() {
    let result = run_fixture();
    // container's rule comes from main.css, minified on the way in
    assert!(result.css.contains("{margin:0 auto}"));
    // id rules follow the class rules
    assert!(result.css.contains("{width:100%}"));
    let class_part = result.css.find("{margin:0 auto}").unwrap();
    let id_part = result.css.find("{width:100%}").unwrap();
    assert!(class_part < id_part);
}

#[test]
fn duplicate_rule_blocks_keep_only_the_first() {
    let result = run_fixture();
    // .btn-primary is declared twice; only the white one survives
    assert!(result.css.contains("{color:white}"));
    assert!(!result.css.contains("{color:red}"));
}

#[test]
fn unstyled_hook_class_contributes_no_css() {
    let result = run_fixture();
    let hook_alias = result
        .class_plan
        .pairs()
        .find(|(original, _)| *original == "js-hook")
        .map(|(_, alias)| alias.to_string())
        .unwrap();
    assert!(!result.css.contains(&format!(".{}{{", hook_alias)));
    assert!(result.html.contains(&hook_alias));
}

#[test]
fn script_is_rewritten_with_the_same_aliases() {
    let result = run_fixture();
    assert_eq!(result.scripts.len(), 1);
    let script = &result.scripts[0];
    assert_eq!(script.output_name, "app.min.js");
    assert!(!script.text.contains("btn-primary"));
    assert!(!script.text.contains("cta"));

    // The alias in the script matches the one in the markup
    let btn_alias = result
        .class_plan
        .pairs()
        .find(|(original, _)| *original == "btn-primary")
        .map(|(_, alias)| alias.to_string())
        .unwrap();
    assert!(script.text.contains(&btn_alias));
    assert!(result.html.contains(r#"src="./app.min.js""#));
}

#[test]
fn aliases_stay_unique_across_class_and_id_passes() {
    let result = run_fixture();
    let mut aliases: Vec<String> = result
        .class_plan
        .pairs()
        .chain(result.id_plan.pairs())
        .map(|(_, alias)| alias.to_string())
        .collect();
    let total = aliases.len();
    aliases.sort();
    aliases.dedup();
    assert_eq!(aliases.len(), total);
}
