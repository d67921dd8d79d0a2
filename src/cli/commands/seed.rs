//! Seed command handler

use anyhow::Context;
use std::path::Path;

use crate::config::Config;
use crate::db::Store;
use crate::models::NewMovie;

/// Reads a JSON array of movies.
pub fn read_seed_file(path: &Path) -> anyhow::Result<Vec<NewMovie>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))
}

pub async fn cmd_seed(config: &Config, path: &Path) -> anyhow::Result<()> {
    let movies = read_seed_file(path)?;
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let inserted = store
        .insert_movies(&movies)
        .await
        .context("Failed to insert seed movies")?;

    println!("✓ Inserted {} movies from {}", inserted, path.display());
    Ok(())
}
