//! Line-oriented CSS minification
//!
//! Strips comments and gratuitous whitespace before rule extraction. This is
//! deliberately not a CSS parser; it normalizes stylesheet text just enough
//! that `selector{…}` blocks can be matched literally.

use regex::Regex;

/// Strip comments and collapse whitespace in `css`.
///
/// Four passes: remove `/*…*/` comments, collapse whitespace runs to a
/// single space, drop whitespace around `:` `;` `{` `}`, and drop the `;`
/// before a closing brace.
pub fn minify(css: &str) -> String {
    let comments = Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid");
    let whitespace_runs = Regex::new(r"\s{2,}").expect("whitespace pattern is valid");
    let around_punctuation = Regex::new(r"\s*([:;{}])\s*").expect("punctuation pattern is valid");

    let css = comments.replace_all(css, "");
    let css = whitespace_runs.replace_all(&css, " ");
    let css = around_punctuation.replace_all(&css, "$1");
    css.replace(";}", "}")
}
