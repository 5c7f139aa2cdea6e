//! Cache CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::Output;
use crate::storage::{DirCache, Resource, Session};

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show the cache directory and what it holds
    Status,

    /// Remove cached index files and documents
    Clear,
}

pub fn run(cmd: CacheCommands, session: &Session, output: &Output) -> Result<()> {
    let cache = session.cache();
    match cmd {
        CacheCommands::Status => status(&cache, output),
        CacheCommands::Clear => clear(&cache, output),
    }
}

/// Keys in the cache that name a known resource
fn cached_resources(cache: &DirCache) -> Result<Vec<(String, Resource)>> {
    let keys = cache.keys().context("Failed to read cache directory")?;
    Ok(keys
        .into_iter()
        .filter_map(|key| Resource::from_cache_key(&key).map(|resource| (key, resource)))
        .collect())
}

fn status(cache: &DirCache, output: &Output) -> Result<()> {
    let Some(path) = cache.path() else {
        if output.is_json() {
            output.data(&serde_json::json!({ "path": null, "entries": [] }))?;
        } else {
            output.line("Cache: unavailable (no cache directory could be determined)")?;
        }
        return Ok(());
    };

    let resources = cached_resources(cache)?;
    let indexes = resources
        .iter()
        .filter(|(_, resource)| matches!(resource, Resource::Index(_)))
        .count();
    let documents = resources.len() - indexes;

    if output.is_json() {
        let entries: Vec<_> = resources.iter().map(|(key, _)| key).collect();
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "indexes": indexes,
            "documents": documents,
            "entries": entries,
        }))?;
        return Ok(());
    }

    let mut lines = vec![
        "Cache Status".to_string(),
        "=".repeat(40),
        format!("Path: {}", path.display()),
        format!("Index files: {}", indexes),
        format!("Documents: {}", documents),
    ];
    if !resources.is_empty() {
        lines.push(String::new());
        lines.extend(
            resources
                .iter()
                .map(|(key, resource)| format!("  {:<16} {}", key, resource)),
        );
    }
    output.lines(lines)?;

    Ok(())
}

fn clear(cache: &DirCache, output: &Output) -> Result<()> {
    if cache.path().is_none() {
        output.success("Cache is unavailable; nothing to clear")?;
        return Ok(());
    }

    let mut removed = 0;
    for (key, _) in cached_resources(cache)? {
        if cache.remove(&key)? {
            removed += 1;
        }
    }
    tracing::info!(removed, "cache cleared");

    output.success(&format!("Removed {} cached file(s)", removed))?;
    Ok(())
}
