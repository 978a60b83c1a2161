//! Alias derivation and rewrite planning
//!
//! Every distinct token gets a short alias; the assignments are then ordered
//! into a [`RewritePlan`] that the content rewriter consumes. The plan's
//! longest-original-first order is an invariant, not a cosmetic choice:
//! replacing `nav` before `navbar` would corrupt every `navbar` occurrence
//! into `<alias>bar`.

use std::collections::HashSet;

/// One original→alias assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMapping {
    /// The token as extracted from markup
    pub original: String,
    /// The shortened replacement, unique within one engine run
    pub alias: String,
    /// Character count of `original`; drives rewrite ordering
    pub weight: usize,
}

/// The finalized, ordered mapping sequence driving all rewrite passes.
///
/// Entries are sorted by weight descending; tokens of equal length keep their
/// extraction order.
#[derive(Debug, Clone, Default)]
pub struct RewritePlan {
    entries: Vec<AliasMapping>,
}

impl RewritePlan {
    /// The mappings in rewrite order (longest original first)
    pub fn entries(&self) -> &[AliasMapping] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ordered `(original, alias)` pairs for listings
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|m| (m.original.as_str(), m.alias.as_str()))
    }
}

/// Alias generator for one engine run.
///
/// Owns the set of candidates already handed out, so collision suffixing
/// stays consistent across every extraction pass of the run. Create a fresh
/// generator per document; nothing here is process-wide.
#[derive(Debug, Default)]
pub struct AliasGenerator {
    seen: HashSet<String>,
}

impl AliasGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the candidate short name for a token.
    ///
    /// Segmented names concatenate each segment's first character
    /// (`btn-primary-lg` → `bpl`, falling back to `_` when the token has no
    /// `-`); a separator-less token keeps its first two characters
    /// (`container` → `co`).
    fn candidate(token: &str) -> String {
        let mut segments: Vec<&str> = token.split('-').collect();
        if segments.len() < 2 {
            segments = token.split('_').collect();
        }
        if segments.len() >= 2 {
            let initials: String = segments.iter().filter_map(|s| s.chars().next()).collect();
            if !initials.is_empty() {
                return initials;
            }
        }
        token.chars().take(2).collect()
    }

    /// Build the rewrite plan for one extraction pass.
    ///
    /// `tokens` must be in first-appearance order; each token's index is its
    /// ordinal. A candidate that was already handed out gains the ordinal as
    /// a suffix. The bare candidate is what gets recorded as seen (not the
    /// suffixed value), so every later collider suffixes against the original
    /// candidate and stays unique through its own ordinal: colliders at
    /// ordinals 3, 7 and 12 on candidate `xx` become `xx3`, `xx7`, `xx12`.
    pub fn plan(&mut self, tokens: &[String]) -> RewritePlan {
        let mut entries = Vec::with_capacity(tokens.len());
        for (ordinal, token) in tokens.iter().enumerate() {
            let candidate = Self::candidate(token);
            let alias = if self.seen.contains(&candidate) {
                format!("{}{}", candidate, ordinal)
            } else {
                candidate.clone()
            };
            self.seen.insert(candidate);
            entries.push(AliasMapping {
                original: token.clone(),
                weight: token.chars().count(),
                alias,
            });
        }

        // Stable sort: equal weights keep extraction order
        entries.sort_by(|a, b| b.weight.cmp(&a.weight));
        RewritePlan { entries }
    }
}
