//! Core data types for the resource catalog.

use serde::{Deserialize, Serialize};

/// Category sentinel meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// One catalog entry describing a downloadable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable identifier, unique within a catalog.
    pub id: u32,
    /// Display name.
    pub title: String,
    /// Asset file name, resolved against the static-asset base path.
    pub filename: String,
    /// Free-text summary.
    pub description: String,
    /// Display group label.
    pub category: String,
}

impl Resource {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        filename: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            filename: filename.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_json_shape() {
        let r = Resource::new(3, "Title", "3.pdf", "Desc", "Fundamentals");
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["filename"], "3.pdf");
        assert_eq!(value["category"], "Fundamentals");
    }
}
