//! Rewrite/invert round-trip property
//!
//! Rewriting markup with a plan and then applying the inverse alias→original
//! map must reproduce the original attribute values byte for byte. This only
//! holds while no alias is an exact substring of another original token,
//! which these fixtures respect.

use idmin::{rewrite, AliasGenerator};

fn plan_for(names: &[&str]) -> idmin::RewritePlan {
    let tokens: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    AliasGenerator::new().plan(&tokens)
}

#[test]
fn roundtrip_restores_simple_markup() {
    let plan = plan_for(&["btn-primary", "main-wrap"]);
    let html = r#"<div class="main-wrap"><a class="btn-primary">go</a></div>"#;

    let rewritten = rewrite::apply(html, &plan);
    assert_ne!(rewritten, html);
    assert_eq!(rewrite::invert(&rewritten, &plan), html);
}

#[test]
fn substring_tokens_rewrite_cleanly_but_do_not_roundtrip() {
    // "na" (the alias of nav) is a substring of the original "navbar", so
    // this pair sits outside the round-trip guarantee; the forward rewrite
    // must still leave no trace of either original.
    let plan = plan_for(&["nav", "navbar"]);
    let html = r#"<div class="navbar"><span class="nav"></span></div>"#;

    let rewritten = rewrite::apply(html, &plan);
    assert!(!rewritten.contains("nav"));
}

#[test]
fn roundtrip_restores_repeated_occurrences() {
    let plan = plan_for(&["card-body"]);
    let html = r#"<div class="card-body"></div><div class="card-body"></div>"#;

    let rewritten = rewrite::apply(html, &plan);
    assert_eq!(rewrite::invert(&rewritten, &plan), html);
}

#[test]
fn rewritten_markup_contains_no_original_tokens() {
    let names = ["sidebar-left", "sidebar", "side"];
    let plan = plan_for(&names);
    let html = r#"<div class="sidebar-left sidebar side"></div>"#;

    let rewritten = rewrite::apply(html, &plan);
    for name in names {
        assert!(
            !rewritten.contains(name),
            "{:?} survived the rewrite: {}",
            name,
            rewritten
        );
    }
}
