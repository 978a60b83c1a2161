//! Plan application over document text
//!
//! Replacement is purely textual: every occurrence of an original token is
//! replaced wherever it appears, with no attribute or word-boundary
//! awareness. This is a known fragility: a token that also occurs inside a
//! URL or a script string literal gets rewritten too. The plan's
//! longest-original-first order is what keeps one token from partially
//! corrupting another that contains it as a substring.

use crate::alias::RewritePlan;

/// Apply `plan` to `content`, longest original first.
///
/// The input is never mutated; the rewritten text is returned.
pub fn apply(content: &str, plan: &RewritePlan) -> String {
    let mut result = content.to_string();
    for mapping in plan.entries() {
        result = result.replace(&mapping.original, &mapping.alias);
    }
    result
}

/// Apply the inverse alias→original map, longest alias first.
///
/// Exact only while no alias is a substring of another original token; used
/// for verification, not by the minification flow itself.
pub fn invert(content: &str, plan: &RewritePlan) -> String {
    let mut entries: Vec<_> = plan.entries().iter().collect();
    entries.sort_by(|a, b| b.alias.chars().count().cmp(&a.alias.chars().count()));

    let mut result = content.to_string();
    for mapping in entries {
        result = result.replace(&mapping.alias, &mapping.original);
    }
    result
}
