//! xtask - Build tasks for idmin
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate man pages from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use idmin::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for idmin")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs { output } => generate_man_pages(&output),
    }
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();

    // Generate main man page
    let man = Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("idmin.1"), buffer)?;
    println!("Generated: {}/idmin.1", man_dir.display());

    // Generate man pages for subcommands
    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }

        let name = subcommand.get_name();
        let man = Man::new(subcommand.clone());
        let mut buffer = Vec::new();
        man.render(&mut buffer)?;
        fs::write(man_dir.join(format!("idmin-{}.1", name)), buffer)?;
        println!("Generated: {}/idmin-{}.1", man_dir.display(), name);

        // Generate man pages for nested subcommands
        for nested in subcommand.get_subcommands() {
            if nested.is_hide_set() {
                continue;
            }
            let nested_name = nested.get_name();
            let man = Man::new(nested.clone());
            let mut buffer = Vec::new();
            man.render(&mut buffer)?;
            fs::write(
                man_dir.join(format!("idmin-{}-{}.1", name, nested_name)),
                buffer,
            )?;
            println!(
                "Generated: {}/idmin-{}-{}.1",
                man_dir.display(),
                name,
                nested_name
            );
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}
