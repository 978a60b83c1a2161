//! The identifier minification engine
//!
//! One [`Engine::run`] call takes a fully gathered [`PageSource`] and
//! produces the rewritten page as plain data. All state (token sets, alias
//! assignments) is created inside the call and dropped with it; concurrent
//! runs share nothing.

use std::collections::HashSet;

use tracing::debug;

use crate::alias::{AliasGenerator, RewritePlan};
use crate::extract::{self, IdentifierKind};
use crate::links;
use crate::page::PageSource;
use crate::rewrite;
use crate::selector;

/// A rewritten script ready to be written next to the page
#[derive(Debug, Clone)]
pub struct MinifiedScript {
    /// The link value as it appeared in the original markup
    pub original_link: String,
    /// File name the rewritten script is served under
    pub output_name: String,
    /// The script text with all identifiers aliased
    pub text: String,
}

/// Everything one engine run produces, for the caller to persist or serve
#[derive(Debug, Clone)]
pub struct MinifiedPage {
    /// The rewritten markup, relinked to the local assets
    pub html: String,
    /// The assembled stylesheet (class rules, then id rules)
    pub css: String,
    /// Rewritten scripts in link order
    pub scripts: Vec<MinifiedScript>,
    /// The class pass plan, for listings
    pub class_plan: RewritePlan,
    /// The id pass plan, for listings
    pub id_plan: RewritePlan,
}

/// The minification engine; stateless between runs
pub struct Engine;

impl Engine {
    /// Run one full minification pass over `source`.
    pub fn run(source: &PageSource) -> MinifiedPage {
        let mut generator = AliasGenerator::new();

        let class_tokens = extract::identifiers(&source.html, IdentifierKind::Class);
        let class_plan = generator.plan(&class_tokens);
        let id_tokens = extract::identifiers(&source.html, IdentifierKind::Id);
        let id_plan = generator.plan(&id_tokens);
        debug!(
            classes = class_plan.len(),
            ids = id_plan.len(),
            "planned identifier rewrites"
        );

        let mut css = selector::extract_rules(&class_plan, IdentifierKind::Class, &source.css_pool);
        css.push_str(&selector::extract_rules(
            &id_plan,
            IdentifierKind::Id,
            &source.css_pool,
        ));

        let mut html = rewrite::apply(&source.html, &class_plan);
        html = rewrite::apply(&html, &id_plan);

        let mut taken_names = HashSet::new();
        let mut scripts = Vec::with_capacity(source.scripts.len());
        for script in &source.scripts {
            let mut text = rewrite::apply(&script.text, &class_plan);
            text = rewrite::apply(&text, &id_plan);

            let output_name = unique_output_name(&script.name, &taken_names);
            taken_names.insert(output_name.clone());

            // The link value inside the rewritten markup may itself have been
            // aliased, so the relink target is the rewritten form of the link
            let mut link_in_html = rewrite::apply(&script.link, &class_plan);
            link_in_html = rewrite::apply(&link_in_html, &id_plan);
            html = links::relink_script(&html, &link_in_html, &format!("./{}", output_name));

            scripts.push(MinifiedScript {
                original_link: script.link.clone(),
                output_name,
                text,
            });
        }

        html = links::relink_stylesheet(&html);

        MinifiedPage {
            html,
            css,
            scripts,
            class_plan,
            id_plan,
        }
    }
}

/// Derive the served file name for a script, keeping names unique when two
/// links carry the same file name.
fn unique_output_name(name: &str, taken: &HashSet<String>) -> String {
    let stem = name.strip_suffix(".js").unwrap_or(name);
    let mut candidate = format!("{}.min.js", stem);
    let mut counter = 1;
    while taken.contains(&candidate) {
        candidate = format!("{}{}.min.js", stem, counter);
        counter += 1;
    }
    candidate
}
