//! # Forensic Catalog Core
//!
//! Shared, UI-agnostic logic for the forensic resource catalog: the
//! [`Resource`](models::Resource) data model, the built-in record set,
//! the validated [`Catalog`](catalog::Catalog), the pure catalog filter,
//! and static-asset link resolution.
//!
//! This crate has no filesystem, configuration, or logging dependencies.
//! Every function here is deterministic and safe to call from any
//! presentation layer.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod links;
pub mod models;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use filter::filter;
pub use models::{Resource, ALL_CATEGORIES};
