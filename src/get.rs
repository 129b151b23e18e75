//! Resource retrieval by id.
//!
//! Used by `fcat get` for a single record with its view/download links.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::search::SearchResultItem;
use crate::source;

/// Look up one resource and attach its links.
pub fn get_resource(config: &Config, id: u32) -> Result<SearchResultItem> {
    let catalog = source::load_catalog(config)?;
    match catalog.get(id) {
        Some(resource) => Ok(SearchResultItem::new(resource, &config.assets.base_path)),
        None => bail!("resource not found: {}", id),
    }
}

/// Print one resource, as a labelled block or as JSON.
pub fn run_get(config: &Config, id: u32, json: bool) -> Result<()> {
    let item = get_resource(config, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }

    println!("--- Resource ---");
    println!("id:            {}", item.id);
    println!("title:         {}", item.title);
    println!("category:      {}", item.category);
    println!("filename:      {}", item.filename);
    println!("view:          {}", item.links.view_url);
    println!("download:      {}", item.links.download_url);
    println!("download name: {}", item.links.download_name);
    println!();
    println!("--- Description ---");
    println!("{}", item.description);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_id() {
        let item = get_resource(&Config::minimal(), 6).unwrap();
        assert_eq!(item.title, "The 7 Questions in Crime Investigation");
        assert_eq!(item.category, "Investigation");
        assert_eq!(
            item.links.view_url,
            "/pdfs/7. The 7 QuestIons In CrIme InvestIgatIon.pdf"
        );
    }

    #[test]
    fn test_get_unknown_id() {
        let err = get_resource(&Config::minimal(), 99).unwrap_err();
        assert_eq!(err.to_string(), "resource not found: 99");
    }
}
