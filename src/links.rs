//! Link discovery, resolution, and relinking in page markup
//!
//! Stylesheets hang off `href="…"` and scripts off `src="…"`; both are
//! matched textually, in document order, the same way identifiers are. After
//! a minification run the document is repointed at the locally written
//! assets.

use std::path::{Path, PathBuf};

use regex::Regex;
use url::Url;

/// The local stylesheet name every minified page links to
pub const LOCAL_STYLESHEET: &str = "./index.css";

/// `href` values containing `.css`, in document order
pub fn stylesheet_links(html: &str) -> Vec<String> {
    attribute_links(html, "href", ".css")
}

/// `src` values containing `.js`, in document order
pub fn script_links(html: &str) -> Vec<String> {
    attribute_links(html, "src", ".js")
}

fn attribute_links(html: &str, attribute: &str, marker: &str) -> Vec<String> {
    let pattern =
        Regex::new(&format!(r#"{}="(.*?)""#, attribute)).expect("attribute pattern is valid");
    pattern
        .captures_iter(html)
        .map(|captures| captures[1].to_string())
        .filter(|link| link.contains(marker))
        .collect()
}

/// Resolve a raw `href`/`src` value against the page URL.
///
/// Absolute values pass through; root-relative values resolve against the
/// host, path-relative values against the page's directory.
pub fn resolve(raw: &str, base: &Url) -> Result<Url, url::ParseError> {
    base.join(raw)
}

/// Resolve a raw link value against a local page file's directory.
pub fn resolve_local(raw: &str, page_path: &Path) -> PathBuf {
    let raw = raw.trim_start_matches("./");
    match page_path.parent() {
        Some(parent) => parent.join(raw),
        None => PathBuf::from(raw),
    }
}

/// Point the document at the single local stylesheet.
///
/// The first stylesheet link becomes [`LOCAL_STYLESHEET`]; the rest are
/// emptied and their now-empty link tags removed.
pub fn relink_stylesheet(html: &str) -> String {
    let links = stylesheet_links(html);

    let mut html = html.to_string();
    for (index, link) in links.iter().enumerate() {
        if index == 0 {
            html = html.replace(link.as_str(), LOCAL_STYLESHEET);
        } else {
            html = html.replace(link.as_str(), "");
        }
    }
    html.replace(r#"<link rel="stylesheet" href="">"#, "")
}

/// Repoint one script link at its locally written replacement.
pub fn relink_script(html: &str, old: &str, new: &str) -> String {
    html.replace(old, new)
}
