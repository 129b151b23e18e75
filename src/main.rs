//! # Forensic Catalog CLI (`fcat`)
//!
//! Browse the forensic science resource catalog from the terminal.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fcat search [query] [--category C]` | Filter resources by text and category |
//! | `fcat categories` | List categories with resource counts |
//! | `fcat get <id>` | Show one resource with its view/download links |
//! | `fcat contact` | Show the site's contact links |
//! | `fcat export` | Write the catalog as JSON |
//! | `fcat check` | Validate the catalog and asset files |
//!
//! ## Examples
//!
//! ```bash
//! fcat search "crime scene"
//! fcat search --category "Crime Scene" --json
//! fcat export --output ./dist/catalog.json --config ./config/fcat.toml
//! ```

use clap::{Parser, Subcommand};
use forensic_catalog::{categories, check, config, contact, export, get, logging, search};
use forensic_catalog_core::ALL_CATEGORIES;
use std::path::PathBuf;

/// Forensic resource catalog with text search and category filtering.
///
/// Configuration is optional. Without `--config`, `./config/fcat.toml` is
/// read if it exists; otherwise the built-in catalog and defaults are used.
#[derive(Parser)]
#[command(
    name = "fcat",
    about = "Forensic science resource catalog: search, filter, and export",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress at info level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter resources by text and category.
    ///
    /// A resource matches when its category equals `--category` (or the
    /// category is `All`) and its title or description contains the query,
    /// ignoring case. Results keep catalog order.
    Search {
        /// Substring to look for in titles and descriptions. Omit to match all.
        query: Option<String>,

        /// Category label (case-sensitive), or `All` for no restriction.
        #[arg(long, short, default_value = ALL_CATEGORIES)]
        category: String,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List categories with resource counts.
    Categories {
        #[arg(long)]
        json: bool,
    },

    /// Show one resource by id.
    Get {
        /// Resource id.
        id: u32,

        #[arg(long)]
        json: bool,
    },

    /// Show the site's contact links.
    Contact,

    /// Export the catalog as JSON for static site rendering.
    Export {
        /// Output file. Prints to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Validate the catalog and, if configured, the asset directory.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cfg = config::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            query,
            category,
            json,
        } => {
            let query = query.unwrap_or_default();
            search::run_search(&cfg, &query, &category, json)?;
        }
        Commands::Categories { json } => {
            categories::run_categories(&cfg, json)?;
        }
        Commands::Get { id, json } => {
            get::run_get(&cfg, id, json)?;
        }
        Commands::Contact => {
            contact::run_contact(&cfg)?;
        }
        Commands::Export { output } => {
            export::run_export(&cfg, output.as_deref())?;
        }
        Commands::Check => {
            check::run_check(&cfg)?;
        }
    }

    Ok(())
}
