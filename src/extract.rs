//! Class and id token extraction from HTML markup

use std::collections::HashSet;

use regex::Regex;

/// The two identifier attributes the minifier rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// `class="…"` attributes, styled via `.name` selectors
    Class,
    /// `id="…"` attributes, styled via `#name` selectors
    Id,
}

impl IdentifierKind {
    /// HTML attribute name carrying this kind of identifier
    pub fn attribute(&self) -> &'static str {
        match self {
            IdentifierKind::Class => "class",
            IdentifierKind::Id => "id",
        }
    }

    /// CSS selector prefix for this kind (`.` for classes, `#` for ids)
    pub fn selector_prefix(&self) -> char {
        match self {
            IdentifierKind::Class => '.',
            IdentifierKind::Id => '#',
        }
    }
}

/// Extract every distinct class/id token from `markup`, in first-appearance
/// order.
///
/// Each matched attribute value is split on whitespace: a `class` attribute
/// may carry several names, and `id` values are split the same way for
/// uniformity. Empty tokens (from `class=""` or repeated spaces) are dropped.
/// Markup without any matching attribute yields an empty list, never an error.
pub fn identifiers(markup: &str, kind: IdentifierKind) -> Vec<String> {
    let pattern = Regex::new(&format!(r#"{}="([^"]*)""#, kind.attribute()))
        .expect("attribute pattern is valid");

    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for captures in pattern.captures_iter(markup) {
        for token in captures[1].split_whitespace() {
            if seen.insert(token.to_string()) {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}
