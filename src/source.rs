//! Catalog loading.
//!
//! The catalog comes from one of two places: the compiled-in record list,
//! or a TOML file named by `[catalog].path` holding `[[resources]]` tables.

use anyhow::{Context, Result};
use forensic_catalog_core::{Catalog, Resource};
use serde::Deserialize;
use std::path::Path;

use crate::config::Config;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    resources: Vec<Resource>,
}

/// Load the catalog selected by `config`.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => load_catalog_file(path),
        None => {
            let catalog = Catalog::builtin();
            tracing::debug!(resources = catalog.len(), "using built-in catalog");
            Ok(catalog)
        }
    }
}

/// Read and validate a `[[resources]]` TOML file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let file: CatalogFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    let catalog = Catalog::new(file.resources)
        .with_context(|| format!("Invalid catalog file: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        resources = catalog.len(),
        "loaded catalog file"
    );
    Ok(catalog)
}

/// Human-readable name of the catalog origin.
pub fn describe_source(config: &Config) -> String {
    match &config.catalog.path {
        Some(path) => format!("file {}", path.display()),
        None => "built-in".to_string(),
    }
}
