//! `fcat search`: run the catalog filter and print matching resources.
//!
//! The filter itself lives in [`forensic_catalog_core::filter`]; this module
//! attaches asset links to each match and handles the empty state.

use anyhow::Result;
use forensic_catalog_core::links::AssetLinks;
use forensic_catalog_core::{Catalog, Resource};
use serde::Serialize;

use crate::config::Config;
use crate::source;

/// Shown when a query/category combination matches nothing.
pub const EMPTY_STATE: &str = "No resources found.";
pub const EMPTY_STATE_HINT: &str = "Try adjusting your search terms or category filter.";

/// One match with the links a card would offer.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub filename: String,
    pub links: AssetLinks,
}

impl SearchResultItem {
    pub fn new(resource: &Resource, base_path: &str) -> Self {
        Self {
            id: resource.id,
            title: resource.title.clone(),
            description: resource.description.clone(),
            category: resource.category.clone(),
            filename: resource.filename.clone(),
            links: AssetLinks::for_resource(resource, base_path),
        }
    }
}

/// Filter `catalog` and attach links. Order follows the catalog.
pub fn search_catalog(
    catalog: &Catalog,
    query: &str,
    category: &str,
    base_path: &str,
) -> Vec<SearchResultItem> {
    if !catalog.has_category(category) {
        tracing::warn!(category, "unknown category, no resources will match");
    }

    let results: Vec<SearchResultItem> = catalog
        .filter(query, category)
        .into_iter()
        .map(|r| SearchResultItem::new(r, base_path))
        .collect();

    tracing::debug!(query, category, matches = results.len(), "filtered catalog");
    results
}

/// CLI entry point.
pub fn run_search(config: &Config, query: &str, category: &str, json: bool) -> Result<()> {
    let catalog = source::load_catalog(config)?;
    let results = search_catalog(&catalog, query, category, &config.assets.base_path);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", EMPTY_STATE);
        println!("{}", EMPTY_STATE_HINT);
        return Ok(());
    }

    for (i, item) in results.iter().enumerate() {
        println!("{}. {} [{}]", i + 1, item.title, item.category);
        println!("    {}", item.description);
        println!("    view:     {}", item.links.view_url);
        println!("    download: {}", item.links.download_url);
        println!("    id: {}", item.id);
        println!();
    }

    Ok(())
}
