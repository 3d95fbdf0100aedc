// src/pipeline/filter.rs

//! Category filtering.

use std::collections::BTreeSet;

use crate::models::{ALL_CATEGORIES, CatalogItem, ViewState};
use crate::utils::same_tag;

/// Category predicate with optional sub-category refinement.
#[derive(Debug, Clone, Copy)]
pub struct CategoryFilter<'a> {
    category: &'a str,
    subcategory: Option<&'a str>,
}

impl<'a> CategoryFilter<'a> {
    pub fn new(category: &'a str, subcategory: Option<&'a str>) -> Self {
        Self {
            category: category.trim(),
            subcategory: subcategory.map(str::trim).filter(|s| !s.is_empty()),
        }
    }

    pub fn from_state(state: &'a ViewState) -> Self {
        Self::new(&state.category, state.subcategory.as_deref())
    }

    /// Whether the sentinel (no filtering) is active.
    pub fn is_all(&self) -> bool {
        self.category.is_empty() || self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
    }

    /// Category test alone, ignoring the sub-category.
    pub fn matches_category<T: CatalogItem>(&self, item: &T) -> bool {
        self.is_all() || item.has_tag(self.category)
    }

    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        self.matches_category(item) && self.subcategory.is_none_or(|sub| item.has_tag(sub))
    }

    /// Records passing the filter, in collection order.
    pub fn apply<'b, T: CatalogItem>(&self, items: &'b [T]) -> Vec<&'b T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Sub-category choices for a category.
///
/// The sorted set of tags carried by the category's records, minus the
/// category itself. Empty when no category is active.
pub fn subcategory_options<T: CatalogItem>(items: &[T], category: &str) -> Vec<String> {
    let filter = CategoryFilter::new(category, None);
    if filter.is_all() {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| filter.matches_category(*item))
        .flat_map(|item| item.tags())
        .filter(|tag| !same_tag(tag, filter.category))
        .map(|tag| tag.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of records per tag, in first-seen tag order.
pub fn tag_counts<T: CatalogItem>(items: &[T]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for tag in items.iter().flat_map(|item| item.tags()) {
        match counts
            .iter_mut()
            .find(|(seen, _)| same_tag(seen, tag))
        {
            Some((_, count)) => *count += 1,
            None => counts.push((tag.clone(), 1)),
        }
    }
    counts
}
