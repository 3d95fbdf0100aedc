// src/pipeline/stages.rs

//! Runs filter, search, sort and paginate over the cached collection.

use super::{CategoryFilter, Page, Paginator, Ranked, SearchQuery, sort_ranked, subcategory_options};
use crate::models::{CatalogItem, ViewState};

/// Result of one recompute.
#[derive(Debug, Clone)]
pub struct Outcome<'a, T> {
    /// The visible page of surviving records
    pub page: Page<Ranked<'a, T>>,
    /// Sub-category choices for the active category
    pub subcategories: Vec<String>,
}

/// Recompute the visible page from the full collection and a view state.
///
/// The collection is only borrowed; every derived view is rebuilt.
pub fn run_stages<'a, T: CatalogItem>(
    items: &'a [T],
    state: &ViewState,
    page_size: usize,
) -> Outcome<'a, T> {
    let filter = CategoryFilter::from_state(state);
    let query = SearchQuery::parse(&state.query);

    let mut survivors: Vec<Ranked<'a, T>> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(*item))
        .filter_map(|(index, item)| {
            let score = match &query {
                Some(query) => match query.score(item) {
                    0 => return None,
                    score => score,
                },
                None => 0,
            };
            Some(Ranked { item, index, score })
        })
        .collect();

    sort_ranked(&mut survivors, state.sort, query.is_some());

    log::debug!(
        "Recomputed listing: {} of {} records (category={}, query={:?}, sort={})",
        survivors.len(),
        items.len(),
        state.category,
        state.query,
        state.sort
    );

    Outcome {
        page: Paginator::new(page_size).paginate(&survivors, state.page),
        subcategories: subcategory_options(items, &state.category),
    }
}

/// Number of records surviving the filter and search stages.
pub fn count_matches<T: CatalogItem>(items: &[T], state: &ViewState) -> usize {
    let filter = CategoryFilter::from_state(state);
    let query = SearchQuery::parse(&state.query);
    items
        .iter()
        .filter(|item| filter.matches(*item))
        .filter(|item| query.as_ref().is_none_or(|q| q.score(*item) > 0))
        .count()
}
