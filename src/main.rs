//! Identifier Minifier (idmin) - CLI entry point

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use humansize::{format_size, BINARY};
use url::Url;

use idmin::cli::{Cli, Commands, ConfigCommands};
use idmin::{Config, Engine, Fetcher, MinifiedPage, PageSource, RewritePlan};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Minify {
            url,
            list_classes,
            list_ids,
            local,
            output,
        } => cmd_minify(&url, list_classes, list_ids, local, output),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cmd_config_show(),
            ConfigCommands::Edit => cmd_config_edit(),
            ConfigCommands::Path => cmd_config_path(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "idmin", &mut io::stdout());
            Ok(())
        }
    }
}

fn cmd_minify(
    url: &str,
    list_classes: bool,
    list_ids: bool,
    local: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;

    let source = if local {
        gather_local(url)?
    } else {
        gather_remote(url, &config)?
    };

    for skipped in &source.skipped {
        eprintln!("Warning: skipped {}", skipped);
    }

    let original_size = source_size(&source);
    let result = Engine::run(&source);

    if result.class_plan.is_empty() && result.id_plan.is_empty() {
        println!("No class or id identifiers found; writing the page unchanged.");
    }

    if list_classes {
        print_alias_table("Classes", &result.class_plan);
    }
    if list_ids {
        print_alias_table("Ids", &result.id_plan);
    }

    let output_dir = output.unwrap_or_else(|| config.output_directory());
    let written = idmin::output::write_page(&result, &output_dir)?;

    print_summary(&result, original_size, written.total_size(), &output_dir);
    Ok(())
}

/// Read the page from disk and gather its assets next to it
fn gather_local(path: &str) -> Result<PageSource> {
    let page_path = Path::new(path);
    let html = Fetcher::local_text(page_path)
        .with_context(|| format!("Failed to read local page: {}", path))?;
    Ok(PageSource::gather_local(html, page_path))
}

/// Validate the URL, probe it, then fetch the page and its assets
fn gather_remote(url: &str, config: &Config) -> Result<PageSource> {
    if !idmin::fetch::is_valid_url(url) {
        bail!("{} is not a valid URL (use --local for files)", url);
    }

    let fetcher = Fetcher::new(config.fetch_timeout(), &config.fetch.user_agent)
        .context("Failed to build HTTP client")?;

    if !fetcher.is_live(url) {
        bail!("{} is not live", url);
    }

    let html = fetcher
        .text(url)
        .with_context(|| format!("Failed to fetch page: {}", url))?;
    let page_url = Url::parse(url).with_context(|| format!("Failed to parse URL: {}", url))?;

    Ok(PageSource::gather_remote(html, &page_url, &fetcher))
}

/// Bytes of page content going into the run
fn source_size(source: &PageSource) -> u64 {
    let scripts: usize = source.scripts.iter().map(|s| s.text.len()).sum();
    (source.html.len() + source.css_pool.len() + scripts) as u64
}

/// Print an alias listing in a formatted table
fn print_alias_table(title: &str, plan: &RewritePlan) {
    println!();
    println!("{} ({})", title, plan.len());

    if plan.is_empty() {
        println!("  (none found)");
        return;
    }

    let original_width = plan
        .pairs()
        .map(|(original, _)| original.chars().count())
        .max()
        .unwrap_or(0)
        .max("Original".len());

    println!("{:<width$} | Alias", "Original", width = original_width);
    println!("{:-<width$}-+-------", "", width = original_width);
    for (original, alias) in plan.pairs() {
        println!("{:<width$} | {}", original, alias, width = original_width);
    }
}

fn print_summary(
    result: &MinifiedPage,
    original_size: u64,
    written_size: u64,
    output_dir: &Path,
) {
    println!();
    println!(
        "Rewrote {} classes, {} ids, {} scripts",
        result.class_plan.len(),
        result.id_plan.len(),
        result.scripts.len()
    );
    println!(
        "Size: {} -> {}",
        format_size(original_size, BINARY),
        format_size(written_size, BINARY)
    );
    println!("Output written to {}", output_dir.display());
}

fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(())
}

fn cmd_config_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    // Ensure config exists
    if !config_path.exists() {
        let config = Config::default();
        config.save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
