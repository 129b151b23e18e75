//! `fcat check`: catalog and asset health.
//!
//! The catalog is validated while loading. When `[assets].dir` points at a
//! local copy of the asset directory, every resource's file is looked up
//! there and missing ones are reported.

use anyhow::{bail, Result};
use forensic_catalog_core::links::asset_relative;
use forensic_catalog_core::Catalog;
use std::path::Path;

use crate::config::Config;
use crate::source;

/// Outcome of checking one resource's asset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStatus {
    pub id: u32,
    pub filename: String,
    pub present: bool,
}

/// Look up every resource's file under `dir`, in catalog order.
pub fn check_assets(catalog: &Catalog, dir: &Path) -> Vec<AssetStatus> {
    catalog
        .resources()
        .iter()
        .map(|r| AssetStatus {
            id: r.id,
            filename: r.filename.clone(),
            present: dir.join(asset_relative(&r.filename)).is_file(),
        })
        .collect()
}

pub fn run_check(config: &Config) -> Result<()> {
    let catalog = source::load_catalog(config)?;

    println!(
        "catalog:    {} ({} resources)",
        source::describe_source(config),
        catalog.len()
    );
    println!("categories: {}", catalog.categories().join(", "));

    let dir = match &config.assets.dir {
        Some(dir) => dir,
        None => {
            println!("assets:     NOT CONFIGURED (set [assets].dir to check files)");
            return Ok(());
        }
    };

    if !dir.is_dir() {
        bail!("assets.dir does not exist: {}", dir.display());
    }

    let statuses = check_assets(&catalog, dir);
    println!();
    println!("{:<4} {:<8} FILE", "ID", "STATUS");
    for s in &statuses {
        let status = if s.present { "OK" } else { "MISSING" };
        println!("{:<4} {:<8} {}", s.id, status, s.filename);
    }

    let missing = statuses.iter().filter(|s| !s.present).count();
    if missing > 0 {
        tracing::warn!(missing, dir = %dir.display(), "asset files missing");
        bail!(
            "{} of {} asset files missing under {}",
            missing,
            statuses.len(),
            dir.display()
        );
    }

    Ok(())
}
