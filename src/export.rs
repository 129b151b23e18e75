//! Export the catalog as JSON for static site rendering.
//!
//! Produces a single document with the site details, the derived category
//! set, and every resource with its resolved links, in display order.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use forensic_catalog_core::Catalog;
use serde::Serialize;
use std::path::Path;

use crate::categories::{self, CategoryEntry};
use crate::config::Config;
use crate::contact::ContactLinks;
use crate::search::SearchResultItem;
use crate::source;

#[derive(Debug, Serialize)]
pub struct ExportData {
    pub generated_at: String,
    pub site: ContactLinks,
    pub asset_base: String,
    pub categories: Vec<CategoryEntry>,
    pub resources: Vec<SearchResultItem>,
}

/// Assemble the export document for `catalog`.
pub fn build_export(config: &Config, catalog: &Catalog) -> ExportData {
    let base = &config.assets.base_path;
    ExportData {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        site: ContactLinks::from_site(&config.site),
        asset_base: base.clone(),
        categories: categories::list_categories(catalog),
        resources: catalog
            .resources()
            .iter()
            .map(|r| SearchResultItem::new(r, base))
            .collect(),
    }
}

/// Export the catalog as JSON.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub fn run_export(config: &Config, output: Option<&Path>) -> Result<()> {
    let catalog = source::load_catalog(config)?;
    let data = build_export(config, &catalog);
    let json = serde_json::to_string_pretty(&data)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote export");
            eprintln!(
                "Exported {} resources, {} categories to {}",
                data.resources.len(),
                data.categories.len(),
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_export_builtin() {
        let data = build_export(&Config::minimal(), &Catalog::builtin());
        assert_eq!(data.resources.len(), 9);
        assert_eq!(data.categories[0].name, "All");
        assert_eq!(data.asset_base, "/pdfs/");
        assert_eq!(data.resources[0].links.view_url, "/pdfs/1 Basics of FS.pdf");
        assert!(data.generated_at.ends_with('Z'));
    }

    #[test]
    fn test_run_export_to_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("site").join("catalog.json");
        run_export(&Config::minimal(), Some(&out)).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["resources"].as_array().unwrap().len(), 9);
        assert_eq!(value["site"]["name"], "Sigma Forensic Scholars");
    }
}
