//! The catalog filter.
//!
//! A record is kept when both predicates hold:
//!
//! 1. **Category**: the selection is [`ALL_CATEGORIES`] or equals the
//!    record's category exactly (case-sensitive).
//! 2. **Query**: the query is empty, or the lowercased title or lowercased
//!    description contains the lowercased query as a substring.
//!
//! Output preserves input order. There is no ranking, tokenization, or
//! error case: an unknown category simply matches nothing.

use crate::models::{Resource, ALL_CATEGORIES};

/// Returns the records matching `query` and `category`, in input order.
pub fn filter<'a>(records: &'a [Resource], query: &str, category: &str) -> Vec<&'a Resource> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_category(r, category) && contains_lowercased(r, &needle))
        .collect()
}

/// Category predicate on its own.
pub fn matches_category(resource: &Resource, category: &str) -> bool {
    category == ALL_CATEGORIES || resource.category == category
}

/// Query predicate on its own.
pub fn matches_query(resource: &Resource, query: &str) -> bool {
    contains_lowercased(resource, &query.to_lowercase())
}

// `needle` must already be lowercased.
fn contains_lowercased(resource: &Resource, needle: &str) -> bool {
    needle.is_empty()
        || resource.title.to_lowercase().contains(needle)
        || resource.description.to_lowercase().contains(needle)
}
