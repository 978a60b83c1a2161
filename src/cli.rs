//! CLI definitions for idmin
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so they can be accessed by xtask for documentation generation
//! (man pages).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using our theme colors.
///
/// - Cyan: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "idmin")]
#[command(about = "[ Identifier Minifier ] - shorten class/id names across a page and its assets")]
#[command(
    long_about = "Identifier Minifier (idmin) - shrink a page by shortening its CSS identifiers.

idmin fetches an HTML page, collects every class and id name used in the
markup, assigns each one a short collision-free alias, and rewrites the page,
its stylesheets, and its scripts consistently. The result is written as
index.html, index.css, and the rewritten scripts, ready to serve.

QUICK START:
    idmin minify https://example.com        Minify a live page
    idmin minify ./page.html --local        Minify a local file
    idmin minify <url> --list-classes       Show the class alias table

Rules with no matching markup identifier are dropped from the output
stylesheet; identifiers with no styling rule are still rewritten in the
markup."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minify a page's class and id identifiers
    #[command(long_about = "Minify a page's class and id identifiers.

Fetches the page, its stylesheets, and its scripts; derives a short alias for
every distinct class and id token; rewrites everything consistently; and
writes the result to the output directory.")]
    Minify {
        /// Page URL, or a file path with --local
        url: String,

        /// Print the class alias table
        #[arg(long)]
        list_classes: bool,

        /// Print the id alias table
        #[arg(long)]
        list_ids: bool,

        /// Treat URL as a local file path and resolve assets on disk
        #[arg(long)]
        local: bool,

        /// Output directory (defaults to the configured one)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in editor
    Edit,
    /// Print the config file path
    Path,
}
