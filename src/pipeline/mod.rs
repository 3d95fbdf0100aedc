//! List-presentation pipeline.
//!
//! - `filter`: category and sub-category narrowing
//! - `search`: relevance scoring against free text
//! - `sort`: selectable comparators
//! - `paginate`: fixed-size page slicing
//! - `stages`: runs the stages above over the cached collection

pub mod filter;
pub mod paginate;
pub mod search;
pub mod sort;
pub mod stages;

pub use filter::{CategoryFilter, subcategory_options, tag_counts};
pub use paginate::{Page, Paginator};
pub use search::SearchQuery;
pub use sort::{SortMode, compare, sort_ranked};
pub use stages::{Outcome, count_matches, run_stages};

/// A record that survived filtering, with its position in the loaded
/// collection and its search score (0 when no query is active).
#[derive(Debug)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub score: u32,
}

impl<T> Clone for Ranked<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ranked<'_, T> {}
