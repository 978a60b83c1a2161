//! CSS rule extraction by class/id selector
//!
//! Works on raw stylesheet text at the selector level, not on a parsed
//! CSSOM. A rule block is everything from `<prefix><token>{` up to the first
//! closing brace, which is exactly the granularity the rewrite engine needs.

use regex::Regex;

use crate::alias::RewritePlan;
use crate::extract::IdentifierKind;

/// Pull the styling rules for every planned token out of `css_pool` and
/// re-emit them under their aliases.
///
/// For each mapping, the first `<prefix><original>{…}` block found is emitted
/// with the selector token swapped for its alias; later blocks with the same
/// selector are dropped (first match wins). A token with no matching rule
/// contributes nothing: it existed in markup but has no styling, e.g. a
/// hook class only scripts care about. Blocks concatenate in plan order.
pub fn extract_rules(plan: &RewritePlan, kind: IdentifierKind, css_pool: &str) -> String {
    let mut output = String::new();

    for mapping in plan.entries() {
        let selector = format!("{}{}", kind.selector_prefix(), mapping.original);
        let pattern = Regex::new(&format!(r"(?s){}\{{.*?\}}", regex::escape(&selector)))
            .expect("escaped selector pattern is valid");

        if let Some(found) = pattern.find(css_pool) {
            let alias_selector = format!("{}{}", kind.selector_prefix(), mapping.alias);
            output.push_str(&found.as_str().replace(&selector, &alias_selector));
        }
    }

    output
}
