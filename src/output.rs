//! Writing a minified page to disk
//!
//! A run produces `index.html`, `index.css`, the rewritten scripts, and a
//! `manifest.json` recording every alias assignment and script rename.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::alias::RewritePlan;
use crate::engine::MinifiedPage;

/// One alias assignment as recorded in the manifest
#[derive(Debug, Serialize)]
struct ManifestPair {
    original: String,
    alias: String,
}

/// One script rename as recorded in the manifest
#[derive(Debug, Serialize)]
struct ManifestScript {
    original: String,
    file: String,
}

#[derive(Debug, Serialize)]
struct Manifest {
    classes: Vec<ManifestPair>,
    ids: Vec<ManifestPair>,
    scripts: Vec<ManifestScript>,
}

fn manifest_pairs(plan: &RewritePlan) -> Vec<ManifestPair> {
    plan.pairs()
        .map(|(original, alias)| ManifestPair {
            original: original.to_string(),
            alias: alias.to_string(),
        })
        .collect()
}

/// Paths of everything a run wrote
#[derive(Debug)]
pub struct WrittenFiles {
    pub html: PathBuf,
    pub css: PathBuf,
    pub scripts: Vec<PathBuf>,
    pub manifest: PathBuf,
}

impl WrittenFiles {
    /// Total size in bytes of the written page assets (manifest excluded)
    pub fn total_size(&self) -> u64 {
        let mut files = vec![&self.html, &self.css];
        files.extend(self.scripts.iter());
        files
            .iter()
            .filter_map(|path| fs::metadata(path).ok())
            .map(|metadata| metadata.len())
            .sum()
    }
}

/// Write `page` under `directory`, creating it if needed.
pub fn write_page(page: &MinifiedPage, directory: &Path) -> Result<WrittenFiles> {
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create output directory: {:?}", directory))?;

    let html_path = directory.join("index.html");
    fs::write(&html_path, &page.html)
        .with_context(|| format!("Failed to write {:?}", html_path))?;

    let css_path = directory.join("index.css");
    fs::write(&css_path, &page.css).with_context(|| format!("Failed to write {:?}", css_path))?;

    let mut script_paths = Vec::with_capacity(page.scripts.len());
    for script in &page.scripts {
        let path = directory.join(&script.output_name);
        fs::write(&path, &script.text).with_context(|| format!("Failed to write {:?}", path))?;
        script_paths.push(path);
    }

    let manifest = Manifest {
        classes: manifest_pairs(&page.class_plan),
        ids: manifest_pairs(&page.id_plan),
        scripts: page
            .scripts
            .iter()
            .map(|script| ManifestScript {
                original: script.original_link.clone(),
                file: script.output_name.clone(),
            })
            .collect(),
    };
    let manifest_path = directory.join("manifest.json");
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
    fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("Failed to write {:?}", manifest_path))?;

    Ok(WrittenFiles {
        html: html_path,
        css: css_path,
        scripts: script_paths,
        manifest: manifest_path,
    })
}
