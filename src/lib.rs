//! Identifier Minifier (idmin) Library
//!
//! Shortens the CSS class and id identifiers used across an HTML page, its
//! referenced stylesheets, and its referenced scripts, so the rewritten page
//! is smaller while staying visually and behaviorally identical.

pub mod alias;
pub mod cli;
pub mod config;
pub mod cssmin;
pub mod engine;
pub mod extract;
pub mod fetch;
pub mod links;
pub mod output;
pub mod page;
pub mod rewrite;
pub mod selector;

pub use alias::{AliasGenerator, AliasMapping, RewritePlan};
pub use config::Config;
pub use engine::{Engine, MinifiedPage, MinifiedScript};
pub use extract::IdentifierKind;
pub use fetch::{FetchError, Fetcher};
pub use page::{PageSource, ScriptSource};
