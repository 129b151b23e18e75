//! The validated, immutable resource catalog.

use std::collections::HashSet;

use crate::builtin;
use crate::error::CatalogError;
use crate::filter;
use crate::models::{Resource, ALL_CATEGORIES};

/// An ordered, validated list of resources.
///
/// Record order is the canonical display order. A catalog never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    resources: Vec<Resource>,
}

impl Catalog {
    /// Build a catalog from external records.
    ///
    /// Rejects duplicate ids, empty titles, filenames or categories, and
    /// any record whose category is the [`ALL_CATEGORIES`] sentinel.
    pub fn new(resources: Vec<Resource>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for r in &resources {
            if !seen.insert(r.id) {
                return Err(CatalogError::DuplicateId { id: r.id });
            }
            if r.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { id: r.id });
            }
            if r.filename.trim().is_empty() {
                return Err(CatalogError::EmptyFilename { id: r.id });
            }
            if r.category.trim().is_empty() {
                return Err(CatalogError::EmptyCategory { id: r.id });
            }
            if r.category == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategory {
                    id: r.id,
                    category: r.category.clone(),
                });
            }
        }
        Ok(Self { resources })
    }

    /// The compiled-in resource list.
    pub fn builtin() -> Self {
        Self {
            resources: builtin::resources(),
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// `"All"` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out = vec![ALL_CATEGORIES];
        for r in &self.resources {
            if !out.contains(&r.category.as_str()) {
                out.push(r.category.as_str());
            }
        }
        out
    }

    /// True for the sentinel and for any category present in the data.
    pub fn has_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.resources.iter().any(|r| r.category == category)
    }

    /// Record count per derived category, in [`categories`](Self::categories) order.
    ///
    /// The sentinel is listed first with the total.
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        self.categories()
            .into_iter()
            .map(|c| (c, filter::filter(&self.resources, "", c).len()))
            .collect()
    }

    /// Runs the catalog filter over this catalog's records.
    pub fn filter(&self, query: &str, category: &str) -> Vec<&Resource> {
        filter::filter(&self.resources, query, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u32, category: &str) -> Resource {
        Resource::new(id, format!("Title {}", id), format!("{}.pdf", id), "", category)
    }

    #[test]
    fn test_builtin_categories() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec!["All", "Fundamentals", "Crime Scene", "Investigation", "Documentation"]
        );
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.category_counts(),
            vec![
                ("All", 9),
                ("Fundamentals", 3),
                ("Crime Scene", 2),
                ("Investigation", 2),
                ("Documentation", 2),
            ]
        );
    }

    #[test]
    fn test_has_category() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_category("All"));
        assert!(catalog.has_category("Crime Scene"));
        assert!(!catalog.has_category("crime scene"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(4).map(|r| r.title.as_str()), Some("Crime Scenes"));
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let err = Catalog::new(vec![sample(1, "A"), sample(1, "B")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId { id: 1 });
    }

    #[test]
    fn test_rejects_empty_title() {
        let mut r = sample(2, "A");
        r.title = "  ".to_string();
        assert_eq!(
            Catalog::new(vec![r]).unwrap_err(),
            CatalogError::EmptyTitle { id: 2 }
        );
    }

    #[test]
    fn test_rejects_reserved_category() {
        let err = Catalog::new(vec![sample(5, "All")]).unwrap_err();
        assert!(matches!(err, CatalogError::ReservedCategory { id: 5, .. }));
        assert!(err.to_string().contains("reserved category 'All'"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), vec!["All"]);
        assert!(catalog.filter("", "All").is_empty());
    }

    #[test]
    fn test_catalog_filter_delegates() {
        let catalog = Catalog::builtin();
        let ids: Vec<u32> = catalog.filter("", "Documentation").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }
}
