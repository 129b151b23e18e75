//! Typed errors for catalog construction.

use thiserror::Error;

/// Reasons a list of records cannot form a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two records share an id.
    #[error("duplicate resource id: {id}")]
    DuplicateId { id: u32 },

    #[error("resource {id} has an empty title")]
    EmptyTitle { id: u32 },

    #[error("resource {id} has an empty filename")]
    EmptyFilename { id: u32 },

    #[error("resource {id} has an empty category")]
    EmptyCategory { id: u32 },

    /// The category label collides with the "All" sentinel.
    #[error("resource {id} uses the reserved category '{category}'")]
    ReservedCategory { id: u32, category: String },
}
