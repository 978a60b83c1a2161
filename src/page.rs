//! Assembling a page's content ahead of an engine run
//!
//! A [`PageSource`] carries the original HTML plus every referenced
//! stylesheet and script as plain text. Gathering is the only step that
//! touches the network (or the filesystem in local mode); the engine itself
//! never does.

use std::path::Path;

use tracing::{debug, warn};
use url::Url;

use crate::cssmin;
use crate::fetch::Fetcher;
use crate::links;

/// One referenced script: the link value as written in the page plus its text
#[derive(Debug, Clone)]
pub struct ScriptSource {
    /// The raw `src` value found in the markup
    pub link: String,
    /// File name portion of the link, e.g. `app.js`
    pub name: String,
    /// The script's text
    pub text: String,
}

/// A page and its assets, fully materialized in memory
#[derive(Debug, Clone, Default)]
pub struct PageSource {
    /// The original, unmodified markup
    pub html: String,
    /// All referenced stylesheets, minified and concatenated in link order
    pub css_pool: String,
    /// All referenced scripts, in link order
    pub scripts: Vec<ScriptSource>,
    /// Links whose assets could not be retrieved, for the caller to report.
    /// A skipped asset contributes no content; the run still proceeds.
    pub skipped: Vec<String>,
}

impl PageSource {
    /// Gather a remote page's assets by resolving each link against the
    /// page URL.
    ///
    /// An unreachable asset is logged and skipped; it simply contributes no
    /// content to the run.
    pub fn gather_remote(html: String, page_url: &Url, fetcher: &Fetcher) -> Self {
        let mut source = PageSource {
            html,
            ..PageSource::default()
        };

        for link in links::stylesheet_links(&source.html) {
            match links::resolve(&link, page_url) {
                Ok(asset_url) => match fetcher.text(asset_url.as_str()) {
                    Ok(text) => source.css_pool.push_str(&cssmin::minify(&text)),
                    Err(error) => source.skip(link, &error.to_string()),
                },
                Err(error) => source.skip(link, &error.to_string()),
            }
        }

        for link in links::script_links(&source.html) {
            match links::resolve(&link, page_url) {
                Ok(asset_url) => match fetcher.text(asset_url.as_str()) {
                    Ok(text) => source.scripts.push(ScriptSource {
                        name: link_file_name(&link),
                        link,
                        text,
                    }),
                    Err(error) => source.skip(link, &error.to_string()),
                },
                Err(error) => source.skip(link, &error.to_string()),
            }
        }

        debug!(
            stylesheets = source.css_pool.len(),
            scripts = source.scripts.len(),
            "gathered page assets"
        );
        source
    }

    /// Gather a local page's assets relative to the page file's directory.
    pub fn gather_local(html: String, page_path: &Path) -> Self {
        let mut source = PageSource {
            html,
            ..PageSource::default()
        };

        for link in links::stylesheet_links(&source.html) {
            let asset_path = links::resolve_local(&link, page_path);
            match Fetcher::local_text(&asset_path) {
                Ok(text) => source.css_pool.push_str(&cssmin::minify(&text)),
                Err(error) => source.skip(link, &error.to_string()),
            }
        }

        for link in links::script_links(&source.html) {
            let asset_path = links::resolve_local(&link, page_path);
            match Fetcher::local_text(&asset_path) {
                Ok(text) => source.scripts.push(ScriptSource {
                    name: link_file_name(&link),
                    link,
                    text,
                }),
                Err(error) => source.skip(link, &error.to_string()),
            }
        }

        source
    }

    fn skip(&mut self, link: String, reason: &str) {
        warn!(%link, reason, "skipping asset");
        self.skipped.push(format!("{} ({})", link, reason));
    }
}

/// File name portion of a link value, with any query or fragment dropped.
fn link_file_name(link: &str) -> String {
    let trimmed = link
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(link)
        .trim_end_matches('/');
    trimmed
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("script.js")
        .to_string()
}
