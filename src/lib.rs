//! # Forensic Catalog
//!
//! A catalog of forensic science PDF resources with case-insensitive text
//! search and category filtering.
//!
//! The filter and data model live in the `forensic-catalog-core` crate and
//! are pure. This crate adds configuration, optional file-backed catalogs,
//! link resolution against the site's asset path, and the `fcat` CLI.
//!
//! ## Quick Start
//!
//! ```bash
//! fcat search crime                       # title/description substring
//! fcat search --category Documentation    # category only
//! fcat categories                         # "All" plus derived labels
//! fcat get 4                              # one record with its links
//! fcat export --output site/catalog.json  # JSON for the static page
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`source`] | Built-in or file-backed catalog loading |
//! | [`search`] | Filtered listing with view/download links |
//! | [`categories`] | Derived category listing |
//! | [`get`] | Single-record lookup |
//! | [`contact`] | Header/footer contact links |
//! | [`export`] | JSON export |
//! | [`check`] | Catalog and asset health |
//! | [`logging`] | Tracing subscriber setup |

pub mod categories;
pub mod check;
pub mod config;
pub mod contact;
pub mod export;
pub mod get;
pub mod logging;
pub mod search;
pub mod source;
