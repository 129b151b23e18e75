//! `fcat categories`: list the derived category set.

use anyhow::Result;
use forensic_catalog_core::Catalog;
use serde::Serialize;

use crate::config::Config;
use crate::source;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub count: usize,
}

/// Categories in selection order, `"All"` first, with record counts.
pub fn list_categories(catalog: &Catalog) -> Vec<CategoryEntry> {
    catalog
        .category_counts()
        .into_iter()
        .map(|(name, count)| CategoryEntry {
            name: name.to_string(),
            count,
        })
        .collect()
}

pub fn run_categories(config: &Config, json: bool) -> Result<()> {
    let catalog = source::load_catalog(config)?;
    let entries = list_categories(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:<24} RESOURCES", "CATEGORY");
    for entry in &entries {
        println!("{:<24} {}", entry.name, entry.count);
    }

    Ok(())
}
